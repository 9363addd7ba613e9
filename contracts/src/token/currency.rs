//! `Currency` (`CRNC`), the ERC-20 whitelisted as a module currency in test
//! deployments of the protocol.
//!
//! It is a plain [`Erc20`] ledger plus a [`Currency::mint`] entry point.
//!
//! WARNING: [`Currency::mint`] performs no access control. Any account can
//! create any amount of tokens for any recipient. This is only acceptable for
//! a sandbox token. Gate it behind an authorization check (e.g. an owner)
//! before using this contract anywhere else.
use alloc::{string::String, vec, vec::Vec};

use alloy_primitives::{Address, U256};
use stylus_sdk::prelude::*;

use crate::token::erc20::{
    self,
    extensions::{metadata::DEFAULT_DECIMALS, IErc20Metadata},
    Erc20, IErc20,
};

/// Display name of the token.
pub const NAME: &str = "Currency";

/// Ticker symbol of the token.
pub const SYMBOL: &str = "CRNC";

/// State of a [`Currency`] token.
#[storage]
pub struct Currency {
    /// Balances, allowances and total supply.
    pub(crate) erc20: Erc20,
}

#[public]
#[implements(IErc20<Error = erc20::Error>, IErc20Metadata)]
impl Currency {
    /// Creates `amount` tokens and assigns them to `to`, increasing the total
    /// supply. Callable by anyone.
    ///
    /// # Arguments
    ///
    /// * `&mut self` - Write access to the contract's state.
    /// * `to` - Account that receives the minted tokens.
    /// * `amount` - Number of tokens to mint.
    ///
    /// # Errors
    ///
    /// * [`erc20::Error::InvalidReceiver`] - If `to` is [`Address::ZERO`].
    ///
    /// # Panics
    ///
    /// * If the total supply would exceed `U256::MAX`.
    ///
    /// # Events
    ///
    /// * [`erc20::Transfer`] from [`Address::ZERO`].
    pub fn mint(
        &mut self,
        to: Address,
        amount: U256,
    ) -> Result<(), erc20::Error> {
        self.erc20._mint(to, amount)
    }
}

#[public]
impl IErc20 for Currency {
    type Error = erc20::Error;

    fn total_supply(&self) -> U256 {
        self.erc20.total_supply()
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.erc20.balance_of(account)
    }

    fn transfer(
        &mut self,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.transfer(to, value)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.erc20.allowance(owner, spender)
    }

    fn approve(
        &mut self,
        spender: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.approve(spender, value)
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.erc20.transfer_from(from, to, value)
    }
}

#[public]
impl IErc20Metadata for Currency {
    fn name(&self) -> String {
        NAME.into()
    }

    fn symbol(&self) -> String {
        SYMBOL.into()
    }

    fn decimals(&self) -> u8 {
        DEFAULT_DECIMALS
    }
}
