use codec::{Decode, Encode};
use frame_support::pallet_prelude::*;
use sp_runtime::RuntimeDebug;
use sp_std::fmt::Debug;

pub type Balance = u128;
pub type Number = Balance;

pub const FEE_DENOMINATOR: Number = 10_000_000_000;

pub const MAX_FEE: Number = 5_000_000_000; // 50%

pub const DAY: Number = 86400;
pub const MIN_FEE_DELAY: Number = 3 * DAY;

#[derive(Encode, Decode, Copy, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct PendingFee {
    // the staged fee rate, in parts of FEE_DENOMINATOR
    pub fee: Number,
    // earliest timestamp at which the staged rate may be applied
    pub applicable_at: Number,
}

#[derive(CloneNoBound, PartialEqNoBound, EqNoBound, RuntimeDebugNoBound, TypeInfo, Encode, Decode, MaxEncodedLen)]
#[codec(mel_bound(skip_type_params(MaxCurrencies)))]
#[scale_info(skip_type_params(MaxCurrencies))]
pub struct Pool<CurrencyId, AccountId, MaxCurrencies: Get<u32>>
where
    AccountId: Clone + Debug + Eq + PartialEq,
    CurrencyId: Clone + Debug + Eq + PartialEq,
{
    pub currency_ids: BoundedVec<CurrencyId, MaxCurrencies>,
    // tradeable balance per currency, excludes the accrued admin fees
    pub balances: BoundedVec<Balance, MaxCurrencies>,
    // admin fee accrued per currency, claimable by the owner
    pub admin_fees: BoundedVec<Balance, MaxCurrencies>,
    // fee charged on swap output, in parts of FEE_DENOMINATOR
    pub fee: Number,
    // staged fee change, if any
    pub pending_fee: Option<PendingFee>,
    // the pool's account
    pub account: AccountId,
    // set at creation, collects accrued fees and commits fee changes
    pub owner: AccountId,
}

impl<CurrencyId, AccountId, MaxCurrencies> Pool<CurrencyId, AccountId, MaxCurrencies>
where
    AccountId: Clone + Debug + Eq + PartialEq,
    CurrencyId: Clone + Debug + Eq + PartialEq,
    MaxCurrencies: Get<u32>,
{
    /// Tradeable balance of the currency at `index`, `None` when out of range.
    pub fn tradeable_balance(&self, index: usize) -> Option<Balance> {
        self.balances.get(index).copied()
    }

    /// Admin fee accrued for the currency at `index`, `None` when out of range.
    pub fn accrued_admin_fee(&self, index: usize) -> Option<Balance> {
        self.admin_fees.get(index).copied()
    }

    /// Add `amount` to the tradeable balance, `None` on overflow.
    pub fn credit(&mut self, index: usize, amount: Balance) -> Option<()> {
        let balance = self.balances.get_mut(index)?;
        *balance = balance.checked_add(amount)?;
        Some(())
    }

    /// Remove `amount` from the tradeable balance, `None` when it exceeds
    /// the balance.
    pub fn debit(&mut self, index: usize, amount: Balance) -> Option<()> {
        let balance = self.balances.get_mut(index)?;
        *balance = balance.checked_sub(amount)?;
        Some(())
    }

    /// Move `amount` out of the tradeable balance into the accrued admin
    /// fees, so the ledger never counts fee value as tradeable.
    pub fn accrue_admin_fee(&mut self, index: usize, amount: Balance) -> Option<()> {
        self.debit(index, amount)?;
        let accrued = self.admin_fees.get_mut(index)?;
        *accrued = accrued.checked_add(amount)?;
        Some(())
    }
}
