//! Helper for reading and writing primitive types to specific storage slots.
use alloc::{vec, vec::Vec};

use alloy_primitives::U256;
use stylus_sdk::prelude::*;

const SLOT_BYTE_SPACE: u8 = 32;

/// Helper for reading and writing primitive types to specific storage slots.
///
/// Proxies use namespaced slots so that their own bookkeeping never overlaps
/// the sequential layout of the logic they forward to. [`StorageSlot`]
/// occupies no storage itself, so it can be embedded in a proxy without
/// shifting that layout.
///
/// Example usage to keep the Hub of a proxy in its own slot:
///
/// ```ignore
/// extern crate alloc;
///
/// use alloy_primitives::{uint, Address, U256};
/// use lens_stylus::utils::storage_slot::StorageSlot;
/// use stylus_sdk::{storage::StorageAddress, prelude::*};
///
/// const HUB_SLOT: U256 = uint!(
///     0xe06be101c48e930ac1c35f6657e88bb197a5f616e53ff23a68f146344ef2a363_U256
/// );
///
/// #[storage]
/// #[entrypoint]
/// pub struct Proxy {
///     storage_slot: StorageSlot,
/// }
///
/// #[public]
/// impl Proxy {
///     fn hub(&self) -> Address {
///         self.storage_slot.get_slot::<StorageAddress>(HUB_SLOT).get()
///     }
/// }
/// ```
#[storage]
pub struct StorageSlot;

impl StorageSlot {
    /// Returns a [`StorageType`] located at `slot`.
    ///
    /// # Arguments
    ///
    /// * `&self` - Read access to the contract's state.
    /// * `slot` - The slot to get the address from.
    #[must_use]
    pub fn get_slot<ST: StorageType>(&self, slot: impl Into<U256>) -> ST {
        // SAFETY: Truncation is safe here because ST::SLOT_BYTES is never
        // larger than 32, so the subtraction cannot underflow and the
        // cast is always valid.
        #[allow(clippy::cast_possible_truncation)]
        unsafe {
            ST::new(
                slot.into(),
                SLOT_BYTE_SPACE - ST::SLOT_BYTES as u8,
                self.__stylus_host.clone(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{uint, Address, U256};
    use motsu::prelude::*;
    use stylus_sdk::storage::{StorageAddress, StorageU256};

    use super::*;

    const NAMESPACED_SLOT: U256 = uint!(12345_U256);

    #[storage]
    struct Layout {
        counter: StorageU256,
        storage_slot: StorageSlot,
    }

    unsafe impl TopLevelStorage for Layout {}

    #[public]
    impl Layout {
        fn namespaced(&self) -> Address {
            self.storage_slot
                .get_slot::<StorageAddress>(NAMESPACED_SLOT)
                .get()
        }

        fn set_namespaced(&mut self, value: Address) {
            self.storage_slot
                .get_slot::<StorageAddress>(NAMESPACED_SLOT)
                .set(value);
        }

        fn counter(&self) -> U256 {
            self.counter.get()
        }

        fn set_counter(&mut self, value: U256) {
            self.counter.set(value);
        }

        fn slot_zero(&self) -> U256 {
            self.storage_slot.get_slot::<StorageU256>(U256::ZERO).get()
        }
    }

    #[motsu::test]
    fn namespaced_slot_does_not_overlap_layout(
        contract: Contract<Layout>,
        alice: Address,
        hub: Address,
    ) {
        assert_eq!(contract.sender(alice).namespaced(), Address::ZERO);

        contract.sender(alice).set_namespaced(hub);
        assert_eq!(contract.sender(alice).namespaced(), hub);
        assert_eq!(contract.sender(alice).counter(), U256::ZERO);
        assert_eq!(contract.sender(alice).slot_zero(), U256::ZERO);

        let value = uint!(42_U256);
        contract.sender(alice).set_counter(value);
        assert_eq!(contract.sender(alice).namespaced(), hub);
        assert_eq!(contract.sender(alice).slot_zero(), value);
    }
}
