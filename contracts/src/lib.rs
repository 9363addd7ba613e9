/*!
# Lens Protocol for Stylus

Contracts of the Lens social-graph protocol written in Rust for
[Arbitrum Stylus](https://docs.arbitrum.io/stylus/stylus-gentle-introduction).

The crate provides:

- [`proxy::hub`]: proxies that record the Lens Hub deploying them and forward
  every call, through `delegatecall`, to the implementation the Hub currently
  reports. Follow and collect NFTs are deployed behind these proxies so that
  the Hub can upgrade all of them at once.
- [`token::currency`]: `Currency` (`CRNC`), an ERC-20 with an open `mint`
  used as a whitelisted module currency in test deployments.

> `Currency::mint` has no access control. Do not deploy it outside of a
> closed test environment.

## Usage

```ignore
use lens_stylus::proxy::{hub::FollowNftProxy, IProxy};
use stylus_sdk::{abi::Bytes, prelude::*, ArbResult};

#[entrypoint]
#[storage]
struct MyFollowNftProxy {
    proxy: FollowNftProxy,
}

#[public]
impl MyFollowNftProxy {
    #[constructor]
    fn constructor(&mut self, data: Bytes) -> Result<(), Vec<u8>> {
        self.proxy.constructor(data)
    }

    #[fallback]
    fn fallback(&mut self, calldata: &[u8]) -> ArbResult {
        self.proxy.do_fallback(calldata)
    }
}
```
*/

#![allow(clippy::module_name_repetitions)]
#![cfg_attr(not(any(test, feature = "std")), no_std, no_main)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![deny(rustdoc::broken_intra_doc_links)]
extern crate alloc;

pub mod proxy;
pub mod token;
pub mod utils;
