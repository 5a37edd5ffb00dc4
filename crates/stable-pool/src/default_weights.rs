//! Autogenerated weights for stable_pool
//!
//! THIS FILE WAS AUTO-GENERATED USING THE SUBSTRATE BENCHMARK CLI VERSION 4.0.0-dev
//! DATE: 2023-07-17, STEPS: `50`, REPEAT: `10`, LOW RANGE: `[]`, HIGH RANGE: `[]`
//! WORST CASE MAP SIZE: `1000000`
//! HOSTNAME: `interlay-rust-runner-2mdm7-jrrg4`, CPU: `AMD EPYC 7502P 32-Core Processor`
//! EXECUTION: Some(Wasm), WASM-EXECUTION: Compiled, CHAIN: Some("kintsugi-dev"), DB CACHE: 1024

// Executed Command:
//   target/release/interbtc-parachain
//   benchmark
//   pallet
//   --pallet
//   stable-pool
//   --extrinsic
//   *
//   --chain
//   kintsugi-dev
//   --execution=wasm
//   --wasm-execution=compiled
//   --steps
//   50
//   --repeat
//   10
//   --output
//   crates/stable-pool/src/default_weights.rs
//   --template
//   .deploy/default-weight-template.hbs

#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use sp_std::marker::PhantomData;

/// Weight functions needed for stable_pool.
pub trait WeightInfo {
    fn create_pool() -> Weight;
    fn swap() -> Weight;
    fn commit_new_fee() -> Weight;
    fn apply_new_fee() -> Weight;
    fn withdraw_admin_fees() -> Weight;
    fn donate_admin_fees() -> Weight;
}

/// Weights for stable_pool using the Substrate node and recommended hardware.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: StablePool NextPoolId (r:1 w:1)
    /// Proof: StablePool NextPoolId (max_values: Some(1), max_size: Some(4), added: 499, mode: MaxEncodedLen)
    /// Storage: Tokens Accounts (r:16 w:16)
    /// Proof: Tokens Accounts (max_values: None, max_size: Some(115), added: 2590, mode: MaxEncodedLen)
    /// Storage: StablePool Pools (r:0 w:1)
    /// Proof: StablePool Pools (max_values: None, max_size: Some(1382), added: 3857, mode: MaxEncodedLen)
    fn create_pool() -> Weight {
        // Proof Size summary in bytes:
        //  Measured:  `1433`
        //  Estimated: `42430`
        // Minimum execution time: 175_213_000 picoseconds.
        Weight::from_parts(176_960_000, 42430)
            .saturating_add(T::DbWeight::get().reads(17_u64))
            .saturating_add(T::DbWeight::get().writes(18_u64))
    }
    /// Storage: StablePool Pools (r:1 w:1)
    /// Proof: StablePool Pools (max_values: None, max_size: Some(1382), added: 3857, mode: MaxEncodedLen)
    /// Storage: Tokens Accounts (r:4 w:4)
    /// Proof: Tokens Accounts (max_values: None, max_size: Some(115), added: 2590, mode: MaxEncodedLen)
    fn swap() -> Weight {
        // Proof Size summary in bytes:
        //  Measured:  `1650`
        //  Estimated: `15207`
        // Minimum execution time: 135_447_000 picoseconds.
        Weight::from_parts(136_569_000, 15207)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(5_u64))
    }
    /// Storage: StablePool Pools (r:1 w:1)
    /// Proof: StablePool Pools (max_values: None, max_size: Some(1382), added: 3857, mode: MaxEncodedLen)
    /// Storage: Timestamp Now (r:1 w:0)
    /// Proof: Timestamp Now (max_values: Some(1), max_size: Some(8), added: 503, mode: MaxEncodedLen)
    fn commit_new_fee() -> Weight {
        // Proof Size summary in bytes:
        //  Measured:  `1188`
        //  Estimated: `4847`
        // Minimum execution time: 29_559_000 picoseconds.
        Weight::from_parts(30_173_000, 4847)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: StablePool Pools (r:1 w:1)
    /// Proof: StablePool Pools (max_values: None, max_size: Some(1382), added: 3857, mode: MaxEncodedLen)
    /// Storage: Timestamp Now (r:1 w:0)
    /// Proof: Timestamp Now (max_values: Some(1), max_size: Some(8), added: 503, mode: MaxEncodedLen)
    fn apply_new_fee() -> Weight {
        // Proof Size summary in bytes:
        //  Measured:  `1205`
        //  Estimated: `4847`
        // Minimum execution time: 29_805_000 picoseconds.
        Weight::from_parts(30_440_000, 4847)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: StablePool Pools (r:1 w:1)
    /// Proof: StablePool Pools (max_values: None, max_size: Some(1382), added: 3857, mode: MaxEncodedLen)
    /// Storage: Tokens Accounts (r:32 w:32)
    /// Proof: Tokens Accounts (max_values: None, max_size: Some(115), added: 2590, mode: MaxEncodedLen)
    fn withdraw_admin_fees() -> Weight {
        // Proof Size summary in bytes:
        //  Measured:  `2219`
        //  Estimated: `87737`
        // Minimum execution time: 239_802_000 picoseconds.
        Weight::from_parts(241_774_000, 87737)
            .saturating_add(T::DbWeight::get().reads(33_u64))
            .saturating_add(T::DbWeight::get().writes(33_u64))
    }
    /// Storage: StablePool Pools (r:1 w:1)
    /// Proof: StablePool Pools (max_values: None, max_size: Some(1382), added: 3857, mode: MaxEncodedLen)
    fn donate_admin_fees() -> Weight {
        // Proof Size summary in bytes:
        //  Measured:  `1188`
        //  Estimated: `4847`
        // Minimum execution time: 28_280_000 picoseconds.
        Weight::from_parts(28_941_000, 4847)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests
impl WeightInfo for () {
    fn create_pool() -> Weight {
        Weight::from_parts(176_960_000, 42430)
            .saturating_add(RocksDbWeight::get().reads(17_u64))
            .saturating_add(RocksDbWeight::get().writes(18_u64))
    }
    fn swap() -> Weight {
        Weight::from_parts(136_569_000, 15207)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(5_u64))
    }
    fn commit_new_fee() -> Weight {
        Weight::from_parts(30_173_000, 4847)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn apply_new_fee() -> Weight {
        Weight::from_parts(30_440_000, 4847)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn withdraw_admin_fees() -> Weight {
        Weight::from_parts(241_774_000, 87737)
            .saturating_add(RocksDbWeight::get().reads(33_u64))
            .saturating_add(RocksDbWeight::get().writes(33_u64))
    }
    fn donate_admin_fees() -> Weight {
        Weight::from_parts(28_941_000, 4847)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
