#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]
extern crate alloc;

use alloc::{string::String, vec::Vec};

use alloy_primitives::{Address, U256};
use lens_stylus::token::{
    currency::Currency,
    erc20::{self, extensions::IErc20Metadata, IErc20},
};
use stylus_sdk::prelude::*;

#[entrypoint]
#[storage]
struct CurrencyExample {
    currency: Currency,
}

#[public]
#[implements(IErc20<Error = erc20::Error>, IErc20Metadata)]
impl CurrencyExample {
    fn mint(&mut self, to: Address, amount: U256) -> Result<(), erc20::Error> {
        self.currency.mint(to, amount)
    }
}

#[public]
impl IErc20 for CurrencyExample {
    type Error = erc20::Error;

    fn total_supply(&self) -> U256 {
        self.currency.total_supply()
    }

    fn balance_of(&self, account: Address) -> U256 {
        self.currency.balance_of(account)
    }

    fn transfer(
        &mut self,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.currency.transfer(to, value)
    }

    fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.currency.allowance(owner, spender)
    }

    fn approve(
        &mut self,
        spender: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.currency.approve(spender, value)
    }

    fn transfer_from(
        &mut self,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<bool, Self::Error> {
        self.currency.transfer_from(from, to, value)
    }
}

#[public]
impl IErc20Metadata for CurrencyExample {
    fn name(&self) -> String {
        self.currency.name()
    }

    fn symbol(&self) -> String {
        self.currency.symbol()
    }

    fn decimals(&self) -> u8 {
        self.currency.decimals()
    }
}
