//! A Hub and two implementation versions to put behind hub proxies in tests.
#![allow(missing_docs)]
use alloc::{string::String, vec::Vec};

use alloy_primitives::{uint, Address, U256};
use alloy_sol_macro::sol;
use alloy_sol_types::SolError;
use stylus_sdk::{
    prelude::*,
    storage::{StorageAddress, StorageBool, StorageU256},
};

sol! {
    interface IImplementation {
        function initialize(uint256 value) external;
        function value() external view returns (uint256);
        function initializeCalls() external view returns (uint256);
        function version() external view returns (uint256);
        function increment() external;
        function fail(string reason) external;
        function setValueAndFail(uint256 value, string reason) external;
    }

    #[derive(Debug)]
    error ImplementationFailure(string reason);

    #[derive(Debug)]
    error HubPaused();
}

#[storage]
pub(crate) struct LensHubMock {
    follow_nft_impl: StorageAddress,
    collect_nft_impl: StorageAddress,
    paused: StorageBool,
}

unsafe impl TopLevelStorage for LensHubMock {}

#[public]
impl LensHubMock {
    #[selector(name = "getFollowNFTImpl")]
    pub(crate) fn get_follow_nft_impl(&self) -> Result<Address, Vec<u8>> {
        self.check_not_paused()?;
        Ok(self.follow_nft_impl.get())
    }

    #[selector(name = "getCollectNFTImpl")]
    pub(crate) fn get_collect_nft_impl(&self) -> Result<Address, Vec<u8>> {
        self.check_not_paused()?;
        Ok(self.collect_nft_impl.get())
    }

    pub(crate) fn set_follow_nft_impl(&mut self, implementation: Address) {
        self.follow_nft_impl.set(implementation);
    }

    pub(crate) fn set_collect_nft_impl(&mut self, implementation: Address) {
        self.collect_nft_impl.set(implementation);
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        self.paused.set(paused);
    }
}

impl LensHubMock {
    fn check_not_paused(&self) -> Result<(), Vec<u8>> {
        if self.paused.get() {
            return Err(HubPaused {}.abi_encode());
        }
        Ok(())
    }
}

#[storage]
pub(crate) struct ImplementationV1 {
    value: StorageU256,
    initialize_calls: StorageU256,
}

unsafe impl TopLevelStorage for ImplementationV1 {}

#[public]
impl ImplementationV1 {
    pub(crate) fn initialize(&mut self, value: U256) {
        self.value.set(value);
        let calls = self.initialize_calls.get();
        self.initialize_calls.set(calls + uint!(1_U256));
    }

    pub(crate) fn value(&self) -> U256 {
        self.value.get()
    }

    pub(crate) fn initialize_calls(&self) -> U256 {
        self.initialize_calls.get()
    }

    pub(crate) fn version(&self) -> U256 {
        uint!(1_U256)
    }

    pub(crate) fn increment(&mut self) {
        let value = self.value.get();
        self.value.set(value + uint!(1_U256));
    }

    pub(crate) fn fail(&mut self, reason: String) -> Result<(), Vec<u8>> {
        Err(ImplementationFailure { reason }.abi_encode())
    }

    pub(crate) fn set_value_and_fail(
        &mut self,
        value: U256,
        reason: String,
    ) -> Result<(), Vec<u8>> {
        self.initialize(value);
        Err(ImplementationFailure { reason }.abi_encode())
    }
}

/// Same layout as [`ImplementationV1`], different logic.
#[storage]
pub(crate) struct ImplementationV2 {
    value: StorageU256,
    initialize_calls: StorageU256,
}

unsafe impl TopLevelStorage for ImplementationV2 {}

#[public]
impl ImplementationV2 {
    pub(crate) fn initialize(&mut self, value: U256) {
        self.value.set(value);
        let calls = self.initialize_calls.get();
        self.initialize_calls.set(calls + uint!(1_U256));
    }

    pub(crate) fn value(&self) -> U256 {
        self.value.get()
    }

    pub(crate) fn initialize_calls(&self) -> U256 {
        self.initialize_calls.get()
    }

    pub(crate) fn version(&self) -> U256 {
        uint!(2_U256)
    }

    pub(crate) fn increment(&mut self) {
        let value = self.value.get();
        self.value.set(value + uint!(10_U256));
    }

    pub(crate) fn fail(&mut self, reason: String) -> Result<(), Vec<u8>> {
        Err(ImplementationFailure { reason }.abi_encode())
    }

    pub(crate) fn set_value_and_fail(
        &mut self,
        value: U256,
        reason: String,
    ) -> Result<(), Vec<u8>> {
        self.initialize(value);
        Err(ImplementationFailure { reason }.abi_encode())
    }
}
