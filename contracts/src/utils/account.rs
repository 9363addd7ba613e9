//! Extensions over the account details exposed by the host environment.
use alloy_primitives::Address;
use stylus_sdk::prelude::AccountAccess;

/// Provides additional access to account details of the host environment.
pub trait AccountAccessExt: AccountAccess {
    /// Determines if an account has code.
    ///
    /// Note that this is insufficient to determine if an address is an [`EOA`].
    /// During contract deployment, an account only gets its code at the very
    /// end, meaning that this method will return `false` while the
    /// constructor is executing.
    ///
    /// [`EOA`]: https://ethereum.org/en/developers/docs/accounts/#types-of-account
    fn has_code(&self, account: Address) -> bool {
        self.code_size(account) > 0
    }
}

impl<T: AccountAccess + ?Sized> AccountAccessExt for T {}

#[cfg(test)]
mod tests {
    use motsu::prelude::*;
    use stylus_sdk::prelude::*;

    use super::*;

    #[storage]
    struct Probe;

    unsafe impl TopLevelStorage for Probe {}

    #[public]
    impl Probe {
        fn has_code(&self, account: Address) -> bool {
            self.vm().has_code(account)
        }
    }

    #[motsu::test]
    fn contract_has_code(probe: Contract<Probe>, alice: Address) {
        assert!(probe.sender(alice).has_code(probe.address()));
    }

    #[motsu::test]
    fn externally_owned_account_has_no_code(
        probe: Contract<Probe>,
        alice: Address,
    ) {
        assert!(!probe.sender(alice).has_code(alice));
        assert!(!probe.sender(alice).has_code(Address::ZERO));
    }
}
