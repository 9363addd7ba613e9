//! Proxy for follow NFT collections.
//!
//! Every call is delegated to whatever the Hub reports from
//! `getFollowNFTImpl()` at that moment.
use alloc::{vec, vec::Vec};

use alloy_primitives::Address;
use stylus_sdk::{abi::Bytes, prelude::*, ArbResult};

use crate::proxy::{
    hub::{HubProxy, IHubProxy, Implementation},
    IProxy,
};

/// State of a [`FollowNftProxy`].
///
/// Occupies no sequential storage: the layout belongs to the follow NFT
/// implementation.
///
/// The fallback is not payable. Calls that carry value revert at the proxy,
/// even when the implementation's method is payable.
#[storage]
pub struct FollowNftProxy {
    hub_proxy: HubProxy,
}

/// NOTE: Implementation of [`TopLevelStorage`] to be able use `&mut self` when
/// calling other contracts and not `&mut (impl TopLevelStorage +
/// BorrowMut<Self>)`. Should be fixed in the future by the Stylus team.
unsafe impl TopLevelStorage for FollowNftProxy {}

#[public]
impl FollowNftProxy {
    /// Records the caller as the Hub, then delegates `data` once to the
    /// follow NFT implementation the caller reports.
    ///
    /// The Hub must create the proxy and call this constructor itself, in the
    /// same transaction. When any other account or factory is the caller, the
    /// call fails and no proxy is deployed.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `data` - Initializer calldata for the implementation.
    ///
    /// # Errors
    ///
    /// * The caller's revert data, unchanged, if it cannot report an
    ///   implementation.
    /// * [`super::Error::InvalidImplementation`] - If the reported address has
    ///   no code.
    /// * Revert data of the implementation, unchanged, if the initializer
    ///   reverts.
    ///
    /// # Events
    ///
    /// * [`super::HubProxyInitialized`].
    #[constructor]
    pub fn constructor(&mut self, data: Bytes) -> Result<(), Vec<u8>> {
        self._initialize(&data)
    }

    #[fallback]
    fn fallback(&mut self, calldata: &[u8]) -> ArbResult {
        self.do_fallback(calldata)
    }
}

impl FollowNftProxy {
    /// Returns the Hub recorded at construction.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    #[must_use]
    pub fn hub(&self) -> Address {
        self.hub_proxy.hub()
    }
}

impl IHubProxy for FollowNftProxy {
    const TARGET: Implementation = Implementation::FollowNft;

    fn hub_proxy(&self) -> &HubProxy {
        &self.hub_proxy
    }

    fn hub_proxy_mut(&mut self) -> &mut HubProxy {
        &mut self.hub_proxy
    }
}

impl IProxy for FollowNftProxy {
    fn implementation(&self) -> Result<Address, Vec<u8>> {
        self._resolve()
    }
}
