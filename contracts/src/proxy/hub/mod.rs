//! Proxies whose implementation is owned by the Lens Hub.
//!
//! A hub proxy records the caller of its constructor as its Hub. On every call
//! it asks the Hub which implementation is current and delegates to it, so an
//! implementation switch on the Hub takes effect for all of its proxies at
//! once, on their very next call.
//!
//! The Hub must create the proxy and call its constructor itself, within the
//! same transaction. Deploying through another account or a factory (such as
//! the `StylusDeployer` used by `cargo stylus deploy`) makes that account the
//! constructor's caller. Construction then queries it for an implementation
//! and reverts.
//!
//! The Hub address lives in its own slot, `keccak256("lens.proxy.hub") - 1`,
//! so the forwarded logic keeps the whole sequential layout to itself.
use alloc::{vec, vec::Vec};

use alloy_primitives::{uint, Address, U256};
pub use callable::ILensHubInterface;
pub use sol::*;
use stylus_sdk::{call::MethodError, prelude::*, storage::StorageAddress};

use crate::{
    proxy::IProxy,
    utils::{AccountAccessExt, StorageSlot},
};

pub mod collect;
pub mod follow;
#[cfg(test)]
pub(crate) mod mock;

pub use collect::CollectNftProxy;
pub use follow::FollowNftProxy;

/// Storage slot with the address of the Hub.
///
/// This is the keccak-256 hash of "lens.proxy.hub" subtracted by 1.
pub const HUB_SLOT: U256 = uint!(
    0xe06be101c48e930ac1c35f6657e88bb197a5f616e53ff23a68f146344ef2a363_U256
);

#[cfg_attr(coverage_nightly, coverage(off))]
mod sol {
    use alloy_sol_macro::sol;

    sol! {
        /// Emitted once, when a hub proxy has been constructed and its
        /// initializer has run against `implementation`.
        ///
        /// * `hub` - Address recorded as the proxy's Hub.
        /// * `implementation` - Implementation the initializer ran against.
        #[derive(Debug)]
        #[allow(missing_docs)]
        event HubProxyInitialized(address indexed hub, address indexed implementation);
    }

    sol! {
        /// The Hub reported an `implementation` that has no code, so there is
        /// nothing to delegate to.
        ///
        /// * `implementation` - Address reported by the Hub.
        #[derive(Debug)]
        #[allow(missing_docs)]
        error HubProxyInvalidImplementation(address implementation);
    }
}

mod callable {
    #![allow(missing_docs)]
    #![cfg_attr(coverage_nightly, coverage(off))]

    use alloc::vec;

    use stylus_sdk::prelude::sol_interface;

    sol_interface! {
        interface ILensHubInterface {
            function getFollowNFTImpl() external view returns (address);
            function getCollectNFTImpl() external view returns (address);
        }
    }
}

/// A [`HubProxy`] error.
#[derive(SolidityError, Debug)]
pub enum Error {
    /// The Hub reported an implementation that has no code.
    InvalidImplementation(HubProxyInvalidImplementation),
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl MethodError for Error {
    fn encode(self) -> alloc::vec::Vec<u8> {
        self.into()
    }
}

/// Which of the Hub's implementation getters a proxy resolves through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Implementation {
    /// `getFollowNFTImpl()`.
    FollowNft,
    /// `getCollectNFTImpl()`.
    CollectNft,
}

/// Hub bookkeeping shared by [`FollowNftProxy`] and [`CollectNftProxy`].
///
/// Occupies no sequential storage.
#[storage]
pub struct HubProxy {
    storage_slot: StorageSlot,
}

impl HubProxy {
    /// Returns the address recorded as the Hub.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    #[must_use]
    pub fn hub(&self) -> Address {
        self.storage_slot.get_slot::<StorageAddress>(HUB_SLOT).get()
    }

    /// Asks the recorded Hub for its current `target` implementation.
    ///
    /// Nothing is cached: every call queries the Hub again.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `context` - The top-level contract issuing the Hub call.
    /// * `target` - The Hub getter to query.
    ///
    /// # Errors
    ///
    /// * The Hub's revert data, unchanged, if the Hub call reverts.
    /// * [`Error::InvalidImplementation`] - If the reported address has no
    ///   code.
    pub fn implementation<T: TopLevelStorage>(
        &self,
        context: &T,
        target: Implementation,
    ) -> Result<Address, Vec<u8>> {
        self.resolve(context, self.hub(), target)
    }

    fn resolve<T: TopLevelStorage>(
        &self,
        context: &T,
        hub: Address,
        target: Implementation,
    ) -> Result<Address, Vec<u8>> {
        let hub = ILensHubInterface::new(hub);
        let implementation = match target {
            Implementation::FollowNft => hub.get_follow_nft_impl(context)?,
            Implementation::CollectNft => hub.get_collect_nft_impl(context)?,
        };

        if !self.vm().has_code(implementation) {
            return Err(Error::InvalidImplementation(
                HubProxyInvalidImplementation { implementation },
            )
            .into());
        }

        Ok(implementation)
    }

    fn _set_hub(&mut self, hub: Address) {
        self.storage_slot.get_slot::<StorageAddress>(HUB_SLOT).set(hub);
    }
}

/// Construction and resolution shared by every hub proxy. Implementors only
/// pick the Hub getter and expose their [`HubProxy`].
pub(crate) trait IHubProxy: IProxy {
    /// The Hub getter this proxy resolves through.
    const TARGET: Implementation;

    /// Returns the proxy's Hub bookkeeping.
    fn hub_proxy(&self) -> &HubProxy;

    /// Returns the proxy's Hub bookkeeping, mutably.
    fn hub_proxy_mut(&mut self) -> &mut HubProxy;

    /// Resolves [`Self::TARGET`] through the recorded Hub.
    fn _resolve(&self) -> Result<Address, Vec<u8>> {
        self.hub_proxy().implementation(self, Self::TARGET)
    }

    /// Records the caller as the Hub and delegates `data` once to the
    /// implementation the caller reports.
    ///
    /// The caller itself is queried, so it must be the Hub: a proxy deployed
    /// through any other account or factory fails here and is never usable.
    /// The Hub is written only once the initializer has succeeded.
    fn _initialize(&mut self, data: &[u8]) -> Result<(), Vec<u8>> {
        let hub = self.hub_proxy().vm().msg_sender();
        let implementation =
            self.hub_proxy().resolve(&*self, hub, Self::TARGET)?;
        self.delegate(implementation, data)?;

        let hub_proxy = self.hub_proxy_mut();
        hub_proxy._set_hub(hub);
        log(hub_proxy.vm(), HubProxyInitialized { hub, implementation });
        Ok(())
    }
}
