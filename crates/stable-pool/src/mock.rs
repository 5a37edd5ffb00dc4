use std::time::SystemTime;

use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{
    parameter_types,
    traits::{ConstU32, Everything},
    PalletId,
};
use orml_traits::{parameter_type_with_key, MultiCurrency};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage, RuntimeDebug,
};

use crate as stable_pool;
use crate::{traits::SwapCurve, Balance, Config};

type Block = frame_system::mocking::MockBlock<Test>;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        Tokens: orml_tokens,
        StablePool: stable_pool,
    }
);

pub type AccountId = u128;
pub type TokenSymbol = u8;
pub type PoolId = u32;

#[derive(Encode, Decode, Eq, PartialEq, Copy, Clone, RuntimeDebug, PartialOrd, Ord, MaxEncodedLen, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub enum CurrencyId {
    Token(TokenSymbol),
}

impl Default for CurrencyId {
    fn default() -> Self {
        CurrencyId::Token(0)
    }
}

// used by the benchmarks to construct distinct currencies from raw values
impl TryFrom<u64> for CurrencyId {
    type Error = ();

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(CurrencyId::Token(value as u8))
    }
}

parameter_types! {
    pub const BlockHashCount: u64 = 250;
    pub const SS58Prefix: u8 = 42;
}

impl frame_system::Config for Test {
    type BaseCallFilter = Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Block = Block;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = AccountId;
    type Lookup = IdentityLookup<Self::AccountId>;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = BlockHashCount;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = SS58Prefix;
    type OnSetCode = ();
    type MaxConsumers = frame_support::traits::ConstU32<16>;
}

pub type Moment = u64;
pub const MILLISECS_PER_BLOCK: Moment = 12000;
pub const SLOT_DURATION: Moment = MILLISECS_PER_BLOCK;

parameter_types! {
    pub const MinimumPeriod: Moment = SLOT_DURATION / 2;
}

impl pallet_timestamp::Config for Test {
    type MinimumPeriod = MinimumPeriod;
    type Moment = Moment;
    type OnTimestampSet = ();
    type WeightInfo = ();
}

parameter_type_with_key! {
    pub ExistentialDeposits: |_currency_id: CurrencyId| -> Balance {
        0
    };
}

impl orml_tokens::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Balance = Balance;
    type Amount = i128;
    type CurrencyId = CurrencyId;
    type WeightInfo = ();
    type ExistentialDeposits = ExistentialDeposits;
    type CurrencyHooks = ();
    type MaxLocks = ();
    type DustRemovalWhitelist = Everything;
    type MaxReserves = ConstU32<0>; // we don't use named reserves
    type ReserveIdentifier = (); // we don't use named reserves
}

/// Quotes 1:1 up to the available output balance, the amplified limit of a
/// stableswap curve. Keeps expected trade amounts exact in tests.
pub struct ConstantSumCurve;

impl SwapCurve for ConstantSumCurve {
    fn quote(
        currency_index_from: usize,
        currency_index_to: usize,
        in_amount: Balance,
        balances: &[Balance],
    ) -> Option<Balance> {
        balances.get(currency_index_from)?;
        let out_balance = balances.get(currency_index_to)?;
        Some(in_amount.min(*out_balance))
    }
}

parameter_types! {
    pub const StablePoolPalletId: PalletId = PalletId(*b"stblpool");
    pub const ApplyRequiresOwner: bool = true;
    pub const MaxCurrencies: u32 = 8;
}

impl Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type CurrencyId = CurrencyId;
    type MultiCurrency = Tokens;
    type PoolId = PoolId;
    type Curve = ConstantSumCurve;
    type TimeProvider = Timestamp;
    type ApplyRequiresOwner = ApplyRequiresOwner;
    type MaxCurrencies = MaxCurrencies;
    type PalletId = StablePoolPalletId;
    type WeightInfo = ();
}

pub type TestEvent = RuntimeEvent;

pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const CHARLIE: AccountId = 3;

pub const TOKEN1_SYMBOL: u8 = 1;
pub const TOKEN2_SYMBOL: u8 = 2;
pub const TOKEN3_SYMBOL: u8 = 3;

pub const UNIT: Balance = 1_000_000_000_000_000_000;

pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    orml_tokens::GenesisConfig::<Test> {
        balances: vec![
            (ALICE, CurrencyId::Token(TOKEN1_SYMBOL), UNIT * 100_000_000),
            (ALICE, CurrencyId::Token(TOKEN2_SYMBOL), UNIT * 100_000_000),
            (ALICE, CurrencyId::Token(TOKEN3_SYMBOL), UNIT * 100_000_000),
            (BOB, CurrencyId::Token(TOKEN1_SYMBOL), UNIT * 100_000_000),
            (BOB, CurrencyId::Token(TOKEN2_SYMBOL), UNIT * 100_000_000),
            (BOB, CurrencyId::Token(TOKEN3_SYMBOL), UNIT * 100_000_000),
            (CHARLIE, CurrencyId::Token(TOKEN1_SYMBOL), UNIT * 100_000_000),
            (CHARLIE, CurrencyId::Token(TOKEN2_SYMBOL), UNIT * 100_000_000),
            (CHARLIE, CurrencyId::Token(TOKEN3_SYMBOL), UNIT * 100_000_000),
        ],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    t.into()
}

pub fn mine_block() {
    let now = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap().as_secs();

    System::set_block_number(System::block_number() + 1);
    set_block_timestamp(now);
}

pub fn mine_block_with_timestamp(timestamp: u64) {
    System::set_block_number(System::block_number() + 1);
    set_block_timestamp(timestamp);
}

// timestamp in second
pub fn set_block_timestamp(timestamp: u64) {
    Timestamp::set_timestamp(timestamp * 1000);
}

pub fn get_user_balance(currency_id: CurrencyId, user: &AccountId) -> Balance {
    <Test as Config>::MultiCurrency::free_balance(currency_id, user)
}

pub fn get_user_token_balances(currencies: &[CurrencyId], user: &AccountId) -> Vec<Balance> {
    currencies
        .iter()
        .map(|currency_id| get_user_balance(*currency_id, user))
        .collect()
}
