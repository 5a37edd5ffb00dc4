//! # Stable Pool Module
//! Multi-asset stable swap pools with separated admin fee accounting.
//! Each pool tracks the tradeable balance of every currency apart from
//! the admin fees accrued on swap output, so the pool account always
//! holds exactly the sum of both. Accrued fees are claimable by the
//! pool owner; fee rate changes only take effect after a timelock.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::too_many_arguments)]

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

mod default_weights;
pub use default_weights::WeightInfo;

#[cfg(test)]
mod mock;


mod primitives;
pub mod traits;

use codec::Codec;
use frame_support::{
    dispatch::DispatchResult,
    pallet_prelude::*,
    traits::UnixTime,
    transactional, PalletId,
};
use orml_traits::MultiCurrency;
use sp_arithmetic::traits::{AtLeast32BitUnsigned, CheckedAdd, One, Zero};
use sp_core::U256;
use sp_runtime::traits::AccountIdConversion;
use sp_std::{vec, vec::Vec};

pub use pallet::*;
pub use primitives::*;
use traits::SwapCurve;

pub type AccountIdOf<T> = <T as frame_system::Config>::AccountId;

pub type PoolOf<T> = Pool<<T as Config>::CurrencyId, AccountIdOf<T>, <T as Config>::MaxCurrencies>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;
    use frame_system::pallet_prelude::*;

    /// ## Configuration
    /// The pallet's configuration trait.
    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// The overarching event type.
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The currency ID type.
        type CurrencyId: Parameter + Member + Copy + MaybeSerializeDeserialize + Ord + TypeInfo + MaxEncodedLen;

        /// Currency handler to transfer tokens.
        type MultiCurrency: MultiCurrency<AccountIdOf<Self>, CurrencyId = Self::CurrencyId, Balance = Balance>;

        /// The pool ID type.
        type PoolId: Parameter
            + Codec
            + Copy
            + Ord
            + AtLeast32BitUnsigned
            + Zero
            + One
            + Default
            + MaxEncodedLen;

        /// Pricing curve quoting the gross output of a swap.
        type Curve: SwapCurve;

        /// The source of timestamps for the fee timelock.
        type TimeProvider: UnixTime;

        /// Whether applying a committed fee change is restricted to the pool
        /// owner, or open to any signed caller once the delay has elapsed.
        #[pallet::constant]
        type ApplyRequiresOwner: Get<bool>;

        /// The most currencies a single pool may hold.
        #[pallet::constant]
        type MaxCurrencies: Get<u32>;

        /// This pallet ID, used for deriving pool accounts.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Weight information for the extrinsics.
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// The id of the next pool.
    #[pallet::storage]
    #[pallet::getter(fn next_pool_id)]
    pub type NextPoolId<T: Config> = StorageValue<_, T::PoolId, ValueQuery>;

    /// Info of a pool.
    #[pallet::storage]
    #[pallet::getter(fn pools)]
    pub type Pools<T: Config> = StorageMap<_, Blake2_128Concat, T::PoolId, PoolOf<T>>;

    // The pallet's events
    #[pallet::event]
    #[pallet::generate_deposit(pub(crate) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A pool was created.
        CreatePool {
            pool_id: T::PoolId,
            currency_ids: Vec<T::CurrencyId>,
            fee: Number,
            account: T::AccountId,
            owner: T::AccountId,
        },
        /// Swapped an amount of one pool currency for another.
        CurrencyExchange {
            pool_id: T::PoolId,
            who: T::AccountId,
            in_index: u32,
            in_amount: Balance,
            out_index: u32,
            out_amount: Balance,
        },
        /// A fee change was committed and its timelock started.
        CommitNewFee {
            pool_id: T::PoolId,
            new_fee: Number,
            applicable_at: Number,
        },
        /// A committed fee change became active.
        ApplyNewFee { pool_id: T::PoolId, new_fee: Number },
        /// A pool's accrued admin fee was paid out to the owner.
        CollectProtocolFee {
            pool_id: T::PoolId,
            currency_id: T::CurrencyId,
            fee_amount: Balance,
        },
        /// A pool's accrued admin fees were folded back into its tradeable
        /// balances.
        DonateAdminFees {
            pool_id: T::PoolId,
            fee_amounts: Vec<Balance>,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The caller is not the owner of the pool.
        Unauthorized,
        /// The debit exceeds the tradeable balance.
        InsufficientBalance,
        /// The fee rate exceeds MAX_FEE.
        InvalidFee,
        /// The committed fee change is still inside its delay.
        NotYetApplicable,
        /// The swap output is below the caller's minimum.
        SlippageExceeded,
        /// The pool id is invalid.
        InvalidPoolId,
        /// The parameters of a call are contradictory.
        MismatchParameter,
        /// The number of pooled currencies exceeds MaxCurrencies.
        TooManyCurrencies,
        /// Seeding a pool requires a nonzero amount of every currency.
        RequireAllCurrencies,
        /// Cannot swap a currency for itself.
        SwapSameCurrency,
        /// A currency index is out of range for this pool.
        CurrencyIndexOutRange,
        /// There is no committed fee change to apply.
        NoPendingFee,
        /// An arithmetic operation failed.
        Arithmetic,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create a stable pool seeded with an initial amount of every
        /// currency, transferred from the caller. The caller becomes the
        /// pool owner.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_pool())]
        #[transactional]
        pub fn create_pool(
            origin: OriginFor<T>,
            currency_ids: Vec<T::CurrencyId>,
            initial_amounts: Vec<Balance>,
            fee: Number,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_create_pool(&who, currency_ids, initial_amounts, fee)?;
            Ok(())
        }

        /// Swap `in_amount` of the currency at `from_index` for at least
        /// `min_out_amount` of the currency at `to_index`.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::swap())]
        #[transactional]
        pub fn swap(
            origin: OriginFor<T>,
            pool_id: T::PoolId,
            from_index: u32,
            to_index: u32,
            in_amount: Balance,
            min_out_amount: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_swap(&who, pool_id, from_index, to_index, in_amount, min_out_amount)?;
            Ok(())
        }

        /// Stage a new fee rate for the pool. The rate only becomes active
        /// once `apply_new_fee` is called after the delay has elapsed.
        /// Committing again before that replaces the staged rate and
        /// restarts the delay.
        ///
        /// Only callable by the pool owner.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::commit_new_fee())]
        #[transactional]
        pub fn commit_new_fee(origin: OriginFor<T>, pool_id: T::PoolId, new_fee: Number) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_commit_new_fee(&who, pool_id, new_fee)
        }

        /// Activate the committed fee rate of the pool.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::apply_new_fee())]
        #[transactional]
        pub fn apply_new_fee(origin: OriginFor<T>, pool_id: T::PoolId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_apply_new_fee(&who, pool_id)
        }

        /// Pay out all accrued admin fees of the pool to its owner and reset
        /// the accumulators. Tradeable balances are untouched; withdrawing
        /// with nothing accrued is a no-op.
        ///
        /// Only callable by the pool owner.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::withdraw_admin_fees())]
        #[transactional]
        pub fn withdraw_admin_fees(origin: OriginFor<T>, pool_id: T::PoolId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_withdraw_admin_fees(&who, pool_id)
        }

        /// Fold all accrued admin fees of the pool back into its tradeable
        /// balances instead of paying them out. No tokens move.
        ///
        /// Only callable by the pool owner.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::donate_admin_fees())]
        #[transactional]
        pub fn donate_admin_fees(origin: OriginFor<T>, pool_id: T::PoolId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_donate_admin_fees(&who, pool_id)
        }
    }
}

// "Internal" functions, callable by code.
impl<T: Config> Pallet<T> {
    fn do_create_pool(
        who: &T::AccountId,
        currency_ids: Vec<T::CurrencyId>,
        initial_amounts: Vec<Balance>,
        fee: Number,
    ) -> Result<T::PoolId, DispatchError> {
        ensure!(currency_ids.len() > 1, Error::<T>::MismatchParameter);
        ensure!(currency_ids.len() == initial_amounts.len(), Error::<T>::MismatchParameter);
        ensure!(
            currency_ids.len() <= T::MaxCurrencies::get() as usize,
            Error::<T>::TooManyCurrencies
        );
        for (i, currency_id) in currency_ids.iter().enumerate() {
            ensure!(!currency_ids[..i].contains(currency_id), Error::<T>::MismatchParameter);
        }
        ensure!(fee <= MAX_FEE, Error::<T>::InvalidFee);

        let pool_id = Self::next_pool_id();
        let account: T::AccountId = T::PalletId::get().into_sub_account_truncating(pool_id);

        let mut balances = Vec::with_capacity(currency_ids.len());
        for (currency_id, amount) in currency_ids.iter().zip(initial_amounts.iter()) {
            ensure!(!amount.is_zero(), Error::<T>::RequireAllCurrencies);
            balances.push(Self::do_transfer_in(*currency_id, who, &account, *amount)?);
        }
        let admin_fees: Vec<Balance> = vec![Zero::zero(); currency_ids.len()];

        let pool = Pool {
            currency_ids: currency_ids
                .clone()
                .try_into()
                .map_err(|_| Error::<T>::TooManyCurrencies)?,
            balances: balances.try_into().map_err(|_| Error::<T>::TooManyCurrencies)?,
            admin_fees: admin_fees.try_into().map_err(|_| Error::<T>::TooManyCurrencies)?,
            fee,
            pending_fee: None,
            account: account.clone(),
            owner: who.clone(),
        };

        Pools::<T>::insert(pool_id, pool);
        NextPoolId::<T>::try_mutate(|id| -> DispatchResult {
            *id = id.checked_add(&One::one()).ok_or(Error::<T>::Arithmetic)?;
            Ok(())
        })?;

        Self::deposit_event(Event::CreatePool {
            pool_id,
            currency_ids,
            fee,
            account,
            owner: who.clone(),
        });

        Ok(pool_id)
    }

    fn do_swap(
        who: &T::AccountId,
        pool_id: T::PoolId,
        from_index: u32,
        to_index: u32,
        in_amount: Balance,
        min_out_amount: Balance,
    ) -> Result<Balance, DispatchError> {
        ensure!(from_index != to_index, Error::<T>::SwapSameCurrency);

        Pools::<T>::try_mutate_exists(pool_id, |optioned_pool| -> Result<Balance, DispatchError> {
            let pool = optioned_pool.as_mut().ok_or(Error::<T>::InvalidPoolId)?;
            let n_currencies = pool.currency_ids.len();
            let i = from_index as usize;
            let j = to_index as usize;
            ensure!(i < n_currencies && j < n_currencies, Error::<T>::CurrencyIndexOutRange);

            let in_amount = Self::do_transfer_in(pool.currency_ids[i], who, &pool.account, in_amount)?;

            // quote against the pre-swap balances
            let gross_out_amount =
                T::Curve::quote(i, j, in_amount, &pool.balances[..]).ok_or(Error::<T>::Arithmetic)?;
            let fee = Self::calculate_fee(gross_out_amount, pool.fee).ok_or(Error::<T>::Arithmetic)?;
            let out_amount = gross_out_amount.checked_sub(fee).ok_or(Error::<T>::Arithmetic)?;
            ensure!(out_amount >= min_out_amount, Error::<T>::SlippageExceeded);

            // the tradeable ledger gives up the full gross output, the fee
            // part of it staying behind in the accrued admin fees
            pool.credit(i, in_amount).ok_or(Error::<T>::Arithmetic)?;
            pool.debit(j, out_amount).ok_or(Error::<T>::InsufficientBalance)?;
            pool.accrue_admin_fee(j, fee).ok_or(Error::<T>::InsufficientBalance)?;

            T::MultiCurrency::transfer(pool.currency_ids[j], &pool.account, who, out_amount)?;

            Self::deposit_event(Event::CurrencyExchange {
                pool_id,
                who: who.clone(),
                in_index: from_index,
                in_amount,
                out_index: to_index,
                out_amount,
            });

            Ok(out_amount)
        })
    }

    fn do_commit_new_fee(who: &T::AccountId, pool_id: T::PoolId, new_fee: Number) -> DispatchResult {
        Pools::<T>::try_mutate_exists(pool_id, |optioned_pool| -> DispatchResult {
            let pool = optioned_pool.as_mut().ok_or(Error::<T>::InvalidPoolId)?;
            ensure!(*who == pool.owner, Error::<T>::Unauthorized);
            ensure!(new_fee <= MAX_FEE, Error::<T>::InvalidFee);

            let now = T::TimeProvider::now().as_secs() as Number;
            let applicable_at = now.checked_add(MIN_FEE_DELAY).ok_or(Error::<T>::Arithmetic)?;
            // replaces any staged fee change and restarts its delay
            pool.pending_fee = Some(PendingFee { fee: new_fee, applicable_at });

            Self::deposit_event(Event::CommitNewFee { pool_id, new_fee, applicable_at });
            Ok(())
        })
    }

    fn do_apply_new_fee(who: &T::AccountId, pool_id: T::PoolId) -> DispatchResult {
        Pools::<T>::try_mutate_exists(pool_id, |optioned_pool| -> DispatchResult {
            let pool = optioned_pool.as_mut().ok_or(Error::<T>::InvalidPoolId)?;
            if T::ApplyRequiresOwner::get() {
                ensure!(*who == pool.owner, Error::<T>::Unauthorized);
            }

            let pending = pool.pending_fee.ok_or(Error::<T>::NoPendingFee)?;
            let now = T::TimeProvider::now().as_secs() as Number;
            ensure!(now >= pending.applicable_at, Error::<T>::NotYetApplicable);

            pool.fee = pending.fee;
            pool.pending_fee = None;

            Self::deposit_event(Event::ApplyNewFee { pool_id, new_fee: pending.fee });
            Ok(())
        })
    }

    fn do_withdraw_admin_fees(who: &T::AccountId, pool_id: T::PoolId) -> DispatchResult {
        Pools::<T>::try_mutate_exists(pool_id, |optioned_pool| -> DispatchResult {
            let pool = optioned_pool.as_mut().ok_or(Error::<T>::InvalidPoolId)?;
            ensure!(*who == pool.owner, Error::<T>::Unauthorized);

            for i in 0..pool.currency_ids.len() {
                let fee_amount = pool.admin_fees[i];
                if !fee_amount.is_zero() {
                    T::MultiCurrency::transfer(
                        pool.currency_ids[i],
                        &pool.account,
                        &pool.owner,
                        fee_amount,
                    )?;
                    pool.admin_fees[i] = Zero::zero();
                }
                Self::deposit_event(Event::CollectProtocolFee {
                    pool_id,
                    currency_id: pool.currency_ids[i],
                    fee_amount,
                });
            }
            Ok(())
        })
    }

    fn do_donate_admin_fees(who: &T::AccountId, pool_id: T::PoolId) -> DispatchResult {
        Pools::<T>::try_mutate_exists(pool_id, |optioned_pool| -> DispatchResult {
            let pool = optioned_pool.as_mut().ok_or(Error::<T>::InvalidPoolId)?;
            ensure!(*who == pool.owner, Error::<T>::Unauthorized);

            let fee_amounts = pool.admin_fees.to_vec();
            for (i, fee_amount) in fee_amounts.iter().enumerate() {
                pool.admin_fees[i] = Zero::zero();
                pool.credit(i, *fee_amount).ok_or(Error::<T>::Arithmetic)?;
            }

            Self::deposit_event(Event::DonateAdminFees { pool_id, fee_amounts });
            Ok(())
        })
    }

    pub(crate) fn do_transfer_in(
        currency_id: T::CurrencyId,
        from: &T::AccountId,
        to: &T::AccountId,
        amount: Balance,
    ) -> Result<Balance, DispatchError> {
        let to_prior_balance = T::MultiCurrency::free_balance(currency_id, to);
        T::MultiCurrency::transfer(currency_id, from, to, amount)?;
        let to_new_balance = T::MultiCurrency::free_balance(currency_id, to);

        to_new_balance
            .checked_sub(to_prior_balance)
            .ok_or_else(|| Error::<T>::Arithmetic.into())
    }

    pub(crate) fn calculate_fee(gross_amount: Balance, fee_rate: Number) -> Option<Balance> {
        U256::from(gross_amount)
            .checked_mul(U256::from(fee_rate))
            .and_then(|n| n.checked_div(U256::from(FEE_DENOMINATOR)))
            .and_then(|n| TryInto::<Balance>::try_into(n).ok())
    }

    /// Tradeable balance of the currency at `index` of the pool.
    pub fn get_currency_balance(pool_id: T::PoolId, index: usize) -> Option<Balance> {
        Self::pools(pool_id).and_then(|pool| pool.tradeable_balance(index))
    }

    /// Admin fee accrued for the currency at `index` of the pool.
    pub fn get_admin_balance(pool_id: T::PoolId, index: usize) -> Option<Balance> {
        Self::pools(pool_id).and_then(|pool| pool.accrued_admin_fee(index))
    }
}
