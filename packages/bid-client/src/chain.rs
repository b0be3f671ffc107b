use async_trait::async_trait;
use cosmwasm_std::{Coin, Event};
use serde::{de::DeserializeOwned, Serialize};

use crate::fee::Fee;

/// Read access to smart contracts on a chain.
#[async_trait(?Send)]
pub trait CosmWasmClient {
    type Error;

    /// Sends `msg` as a smart query to `contract_address` and decodes the reply.
    async fn query_contract_smart<Q, R>(
        &self,
        contract_address: &str,
        msg: &Q,
    ) -> Result<R, Self::Error>
    where
        Q: Serialize,
        R: DeserializeOwned;
}

/// Signing access: everything [`CosmWasmClient`] does, plus broadcasting
/// execute transactions on behalf of `sender`.
#[async_trait(?Send)]
pub trait SigningCosmWasmClient: CosmWasmClient {
    async fn execute<M>(
        &self,
        sender: &str,
        contract_address: &str,
        msg: &M,
        fee: Fee,
        memo: Option<String>,
        funds: Option<Vec<Coin>>,
    ) -> Result<ExecuteResult, Self::Error>
    where
        M: Serialize;
}

#[async_trait(?Send)]
impl<T: CosmWasmClient + ?Sized> CosmWasmClient for &T {
    type Error = T::Error;

    async fn query_contract_smart<Q, R>(
        &self,
        contract_address: &str,
        msg: &Q,
    ) -> Result<R, Self::Error>
    where
        Q: Serialize,
        R: DeserializeOwned,
    {
        (**self).query_contract_smart(contract_address, msg).await
    }
}

#[async_trait(?Send)]
impl<T: SigningCosmWasmClient + ?Sized> SigningCosmWasmClient for &T {
    async fn execute<M>(
        &self,
        sender: &str,
        contract_address: &str,
        msg: &M,
        fee: Fee,
        memo: Option<String>,
        funds: Option<Vec<Coin>>,
    ) -> Result<ExecuteResult, Self::Error>
    where
        M: Serialize,
    {
        (**self)
            .execute(sender, contract_address, msg, fee, memo, funds)
            .await
    }
}

/// Outcome of a broadcast execute transaction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecuteResult {
    pub transaction_hash: String,
    pub height: u64,
    pub gas_wanted: u64,
    pub gas_used: u64,
    pub events: Vec<Event>,
}
