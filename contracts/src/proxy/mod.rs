//! Proxies that forward calls to a runtime-resolved implementation while
//! keeping their own storage.
use alloc::vec::Vec;

use alloy_primitives::Address;
use stylus_sdk::{
    call::{self, Call, Error},
    prelude::*,
};

pub mod hub;

/// This trait provides a fallback function that delegates all calls to another
/// contract using the EVM instruction `delegatecall`. We refer to the second
/// contract as the _implementation_ behind the proxy, and it has to be
/// specified by overriding the [`IProxy::implementation`] function.
///
/// Additionally, delegation to the implementation can be triggered manually
/// through the [`IProxy::do_fallback`] function, or to a different contract
/// through the [`IProxy::delegate`] function.
///
/// The success and return data of the delegated call will be returned back
/// to the caller of the proxy.
pub trait IProxy: TopLevelStorage + Sized {
    /// Delegates the current call to `implementation`.
    ///
    /// The implementation's code runs against the storage of `self`. Its
    /// return data, or its revert data, is handed back untouched.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `implementation` - The address of the implementation contract.
    /// * `calldata` - The calldata to delegate to the implementation contract.
    ///
    /// # Errors
    ///
    /// * [`Error::Revert`] - If the implementation reverts. Carries the
    ///   implementation's revert data.
    fn delegate(
        &mut self,
        implementation: Address,
        calldata: &[u8],
    ) -> Result<Vec<u8>, Error> {
        unsafe {
            call::delegate_call(Call::new_in(self), implementation, calldata)
        }
    }

    /// Returns the address to which the fallback function and
    /// [`IProxy::do_fallback`] should delegate.
    ///
    /// Called before every delegation, so implementors must not memoize the
    /// result.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    ///
    /// # Errors
    ///
    /// * Encoded revert data when no usable implementation can be resolved.
    fn implementation(&self) -> Result<Address, Vec<u8>>;

    /// Fallback function that delegates calls to the address returned
    /// by [`IProxy::implementation`]. Will run if no other function in the
    /// contract matches the call data.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `calldata` - The calldata to delegate to the implementation contract.
    ///
    /// # Errors
    ///
    /// * Revert data of [`IProxy::implementation`] if resolution fails.
    /// * Revert data of the implementation, byte-for-byte, if it reverts.
    fn do_fallback(&mut self, calldata: &[u8]) -> Result<Vec<u8>, Vec<u8>> {
        let implementation = self.implementation()?;
        Ok(self.delegate(implementation, calldata)?)
    }
}
