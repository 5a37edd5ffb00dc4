use super::*;
use frame_benchmarking::v2::{benchmarks, impl_benchmark_test_suite, whitelisted_caller};
use frame_support::assert_ok;
use frame_system::RawOrigin;
use sp_std::vec;

// Pallets
use crate::Pallet as StablePool;

const UNIT: Balance = 1_000_000_000_000;
const SWAP_FEE: Number = 100_000_000; // 1%
const NEW_FEE: Number = 200_000_000; // 2%

fn token1<CurrencyId: TryFrom<u64> + Default>() -> CurrencyId {
    CurrencyId::try_from(513u64).unwrap_or_default()
}

fn token2<CurrencyId: TryFrom<u64> + Default>() -> CurrencyId {
    CurrencyId::try_from(514u64).unwrap_or_default()
}

fn setup_pool<T: Config>(owner: &T::AccountId) -> T::PoolId
where
    T::CurrencyId: TryFrom<u64> + Default,
{
    let currency_ids = vec![token1::<T::CurrencyId>(), token2::<T::CurrencyId>()];
    for currency_id in currency_ids.iter() {
        assert_ok!(T::MultiCurrency::deposit(*currency_id, owner, 1_000 * UNIT));
    }

    StablePool::<T>::do_create_pool(owner, currency_ids, vec![100 * UNIT, 100 * UNIT], SWAP_FEE).unwrap()
}

fn accrue_fees<T: Config>(owner: &T::AccountId, pool_id: T::PoolId) {
    assert_ok!(StablePool::<T>::do_swap(owner, pool_id, 0, 1, 10 * UNIT, 0));
}

#[benchmarks(where T::CurrencyId: TryFrom<u64> + Default)]
pub mod benchmarks {
    use super::*;

    #[benchmark]
    pub fn create_pool() {
        let caller: T::AccountId = whitelisted_caller();
        let currency_ids = vec![token1::<T::CurrencyId>(), token2::<T::CurrencyId>()];
        for currency_id in currency_ids.iter() {
            assert_ok!(T::MultiCurrency::deposit(*currency_id, &caller, 1_000 * UNIT));
        }

        #[extrinsic_call]
        StablePool::<T>::create_pool(
            RawOrigin::Signed(caller),
            currency_ids,
            vec![100 * UNIT, 100 * UNIT],
            SWAP_FEE,
        );
    }

    #[benchmark]
    pub fn swap() {
        let caller: T::AccountId = whitelisted_caller();
        let pool_id = setup_pool::<T>(&caller);

        #[extrinsic_call]
        StablePool::<T>::swap(RawOrigin::Signed(caller), pool_id, 0, 1, 10 * UNIT, 0);
    }

    #[benchmark]
    pub fn commit_new_fee() {
        let caller: T::AccountId = whitelisted_caller();
        let pool_id = setup_pool::<T>(&caller);

        #[extrinsic_call]
        StablePool::<T>::commit_new_fee(RawOrigin::Signed(caller), pool_id, NEW_FEE);
    }

    #[benchmark]
    pub fn apply_new_fee() {
        let caller: T::AccountId = whitelisted_caller();
        let pool_id = setup_pool::<T>(&caller);
        assert_ok!(StablePool::<T>::do_commit_new_fee(&caller, pool_id, NEW_FEE));

        // the generic time provider cannot be advanced here, so make the
        // staged change applicable by backdating its deadline
        Pools::<T>::mutate(pool_id, |maybe_pool| {
            if let Some(pool) = maybe_pool {
                if let Some(pending) = pool.pending_fee.as_mut() {
                    pending.applicable_at = 0;
                }
            }
        });

        #[extrinsic_call]
        StablePool::<T>::apply_new_fee(RawOrigin::Signed(caller), pool_id);
    }

    #[benchmark]
    pub fn withdraw_admin_fees() {
        let caller: T::AccountId = whitelisted_caller();
        let pool_id = setup_pool::<T>(&caller);
        accrue_fees::<T>(&caller, pool_id);

        #[extrinsic_call]
        StablePool::<T>::withdraw_admin_fees(RawOrigin::Signed(caller), pool_id);
    }

    #[benchmark]
    pub fn donate_admin_fees() {
        let caller: T::AccountId = whitelisted_caller();
        let pool_id = setup_pool::<T>(&caller);
        accrue_fees::<T>(&caller, pool_id);

        #[extrinsic_call]
        StablePool::<T>::donate_admin_fees(RawOrigin::Signed(caller), pool_id);
    }

    impl_benchmark_test_suite!(StablePool, crate::mock::new_test_ext(), crate::mock::Test);
}
