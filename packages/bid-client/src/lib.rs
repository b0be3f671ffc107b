//! Typed client for the bid contract.
//!
//! [`BidQueryClient`] wraps any [`CosmWasmClient`] and exposes the contract's
//! queries as methods. [`BidClient`] wraps a [`SigningCosmWasmClient`] and adds
//! the execute messages on top. Both only build the contract's JSON messages and
//! hand them to the underlying chain client, whose results and errors are
//! returned untouched.
//!
//! ```ignore
//! let client = BidClient::new(signing_client, "juno1sender", "juno1contract");
//!
//! client.place_bid(None, TxOptions::default().with_funds(coins(1000, "ujunox"))).await?;
//! let bids = client.bids().await?;
//! ```

pub mod chain;
pub mod client;
pub mod fee;


pub use crate::chain::{CosmWasmClient, ExecuteResult, SigningCosmWasmClient};
pub use crate::client::{BidClient, BidExecute, BidQuery, BidQueryClient};
pub use crate::fee::{Fee, StdFee, TxOptions};
