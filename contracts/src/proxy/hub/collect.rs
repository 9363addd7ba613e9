//! Proxy for collect NFT collections.
//!
//! Same forwarding as [`super::FollowNftProxy`], resolved through the Hub's
//! `getCollectNFTImpl()`.
use alloc::{vec, vec::Vec};

use alloy_primitives::Address;
use stylus_sdk::{abi::Bytes, prelude::*, ArbResult};

use crate::proxy::{
    hub::{HubProxy, IHubProxy, Implementation},
    IProxy,
};

/// State of a [`CollectNftProxy`].
///
/// Like [`super::FollowNftProxy`], its fallback is not payable.
#[storage]
pub struct CollectNftProxy {
    hub_proxy: HubProxy,
}

/// NOTE: Implementation of [`TopLevelStorage`] to be able use `&mut self` when
/// calling other contracts and not `&mut (impl TopLevelStorage +
/// BorrowMut<Self>)`. Should be fixed in the future by the Stylus team.
unsafe impl TopLevelStorage for CollectNftProxy {}

#[public]
impl CollectNftProxy {
    /// Records the caller as the Hub, then delegates `data` once to the
    /// collect NFT implementation the caller reports.
    ///
    /// Same deployment requirement and failure modes as
    /// [`super::FollowNftProxy::constructor`].
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `data` - Initializer calldata for the implementation.
    ///
    /// # Errors
    ///
    /// * Revert data of the caller, of [`super::Error`] or of the
    ///   implementation, unchanged.
    #[constructor]
    pub fn constructor(&mut self, data: Bytes) -> Result<(), Vec<u8>> {
        self._initialize(&data)
    }

    #[fallback]
    fn fallback(&mut self, calldata: &[u8]) -> ArbResult {
        self.do_fallback(calldata)
    }
}

impl CollectNftProxy {
    /// Returns the Hub recorded at construction.
    #[must_use]
    pub fn hub(&self) -> Address {
        self.hub_proxy.hub()
    }
}

impl IHubProxy for CollectNftProxy {
    const TARGET: Implementation = Implementation::CollectNft;

    fn hub_proxy(&self) -> &HubProxy {
        &self.hub_proxy
    }

    fn hub_proxy_mut(&mut self) -> &mut HubProxy {
        &mut self.hub_proxy
    }
}

impl IProxy for CollectNftProxy {
    fn implementation(&self) -> Result<Address, Vec<u8>> {
        self._resolve()
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{uint, Address, U256};
    use alloy_sol_types::{SolCall, SolError, SolValue};
    use motsu::prelude::*;

    use super::*;
    use crate::proxy::hub::{
        mock::{
            IImplementation, ImplementationV1, ImplementationV2, LensHubMock,
        },
        HubProxyInitialized, HubProxyInvalidImplementation,
    };

    #[motsu::test]
    fn resolves_through_collect_getter(
        proxy: Contract<CollectNftProxy>,
        hub: Contract<LensHubMock>,
        v1: Contract<ImplementationV1>,
        v2: Contract<ImplementationV2>,
        alice: Address,
    ) {
        hub.sender(alice).set_follow_nft_impl(v1.address());
        hub.sender(alice).set_collect_nft_impl(v2.address());

        let value = uint!(9_U256);
        let data = IImplementation::initializeCall { value }.abi_encode();
        proxy
            .sender(hub.address())
            .constructor(data.into())
            .motsu_expect("should construct proxy");

        proxy.assert_emitted(&HubProxyInitialized {
            hub: hub.address(),
            implementation: v2.address(),
        });
        assert_eq!(proxy.sender(alice).hub(), hub.address());
        assert_eq!(proxy.sender(alice).implementation(), Ok(v2.address()));

        let version = proxy
            .sender(alice)
            .fallback(&IImplementation::versionCall {}.abi_encode())
            .motsu_expect("should read version");
        assert_eq!(version, uint!(2_U256).abi_encode());

        let stored = proxy
            .sender(alice)
            .fallback(&IImplementation::valueCall {}.abi_encode())
            .motsu_expect("should read value");
        assert_eq!(stored, value.abi_encode());
    }

    #[motsu::test]
    fn ignores_follow_implementation(
        proxy: Contract<CollectNftProxy>,
        hub: Contract<LensHubMock>,
        v1: Contract<ImplementationV1>,
        alice: Address,
    ) {
        hub.sender(alice).set_follow_nft_impl(v1.address());

        let data = IImplementation::initializeCall { value: U256::ZERO }
            .abi_encode();
        let err = proxy
            .sender(hub.address())
            .constructor(data.into())
            .motsu_expect_err("collect implementation is unset");

        assert_eq!(
            err,
            HubProxyInvalidImplementation { implementation: Address::ZERO }
                .abi_encode()
        );
    }
}
