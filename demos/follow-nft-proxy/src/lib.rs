#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::vec::Vec;

use alloy_primitives::Address;
use lens_stylus::proxy::{hub::FollowNftProxy, IProxy};
use stylus_sdk::{abi::Bytes, prelude::*, ArbResult};

#[entrypoint]
#[storage]
struct FollowNftProxyExample {
    follow_nft_proxy: FollowNftProxy,
}

#[public]
impl FollowNftProxyExample {
    #[constructor]
    pub fn constructor(&mut self, data: Bytes) -> Result<(), Vec<u8>> {
        self.follow_nft_proxy.constructor(data)
    }

    #[fallback]
    fn fallback(&mut self, calldata: &[u8]) -> ArbResult {
        self.do_fallback(calldata)
    }
}

impl IProxy for FollowNftProxyExample {
    fn implementation(&self) -> Result<Address, Vec<u8>> {
        self.follow_nft_proxy.implementation()
    }
}
