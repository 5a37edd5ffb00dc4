use crate::primitives::Balance;

/// Pricing curve consulted for the gross output of a swap.
pub trait SwapCurve {
    /// The gross amount of the currency at `currency_index_to` paid out for
    /// `in_amount` of the currency at `currency_index_from`, before fees.
    /// Must be a pure function of the tradeable `balances` snapshot.
    /// `None` when the trade cannot be priced.
    fn quote(
        currency_index_from: usize,
        currency_index_to: usize,
        in_amount: Balance,
        balances: &[Balance],
    ) -> Option<Balance>;
}
