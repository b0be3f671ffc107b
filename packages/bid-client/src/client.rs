use async_trait::async_trait;
use bid::{
    msg::{BidResponse, BiddingPeriodResponse, BidsResponse, ExecuteMsg, QueryMsg},
    state::BiddingPeriod,
};
use cosmwasm_std::Addr;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    chain::{CosmWasmClient, ExecuteResult, SigningCosmWasmClient},
    fee::TxOptions,
};

/// Read-only interface of the bid contract.
#[async_trait(?Send)]
pub trait BidQuery {
    type Error;

    fn contract_address(&self) -> &str;

    async fn bidding_period(&self) -> Result<BiddingPeriodResponse, Self::Error>;

    async fn bids(&self) -> Result<BidsResponse, Self::Error>;

    async fn bid(&self, address: Addr) -> Result<BidResponse, Self::Error>;
}

/// Read-write interface of the bid contract. Anything that can execute can
/// also query.
#[async_trait(?Send)]
pub trait BidExecute: BidQuery {
    fn sender(&self) -> &str;

    /// Admin only. Opens a bidding period with `config`.
    async fn start_bidding(
        &self,
        config: BiddingPeriod,
        opts: TxOptions,
    ) -> Result<ExecuteResult, Self::Error>;

    /// Admin only. Closes the bidding period, keeping the funds of
    /// `accepted_bids` and refunding every other bidder.
    async fn end_bidding(
        &self,
        accepted_bids: Vec<Addr>,
        withdrawal_address: Option<Addr>,
        opts: TxOptions,
    ) -> Result<ExecuteResult, Self::Error>;

    /// Bids the funds in `opts`, for `address` or, when `None`, for the sender.
    async fn place_bid(
        &self,
        address: Option<Addr>,
        opts: TxOptions,
    ) -> Result<ExecuteResult, Self::Error>;
}

pub struct BidQueryClient<C> {
    client: C,
    contract_address: String,
}

impl<C: CosmWasmClient> BidQueryClient<C> {
    pub fn new(client: C, contract_address: impl Into<String>) -> Self {
        BidQueryClient {
            client,
            contract_address: contract_address.into(),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    async fn query<R>(&self, msg: &QueryMsg) -> Result<R, C::Error>
    where
        R: DeserializeOwned,
    {
        debug!(contract = %self.contract_address, ?msg, "smart query");
        self.client
            .query_contract_smart(&self.contract_address, msg)
            .await
    }
}

#[async_trait(?Send)]
impl<C: CosmWasmClient> BidQuery for BidQueryClient<C> {
    type Error = C::Error;

    fn contract_address(&self) -> &str {
        &self.contract_address
    }

    async fn bidding_period(&self) -> Result<BiddingPeriodResponse, Self::Error> {
        self.query(&QueryMsg::BiddingPeriod {}).await
    }

    async fn bids(&self) -> Result<BidsResponse, Self::Error> {
        self.query(&QueryMsg::Bids {}).await
    }

    async fn bid(&self, address: Addr) -> Result<BidResponse, Self::Error> {
        self.query(&QueryMsg::Bid { address }).await
    }
}

/// Signing client for the bid contract. Queries go through the same
/// [`BidQueryClient`] a read-only user would get.
pub struct BidClient<C> {
    query: BidQueryClient<C>,
    sender: String,
}

impl<C: SigningCosmWasmClient> BidClient<C> {
    pub fn new(client: C, sender: impl Into<String>, contract_address: impl Into<String>) -> Self {
        BidClient {
            query: BidQueryClient::new(client, contract_address),
            sender: sender.into(),
        }
    }

    pub fn client(&self) -> &C {
        self.query.client()
    }

    pub fn as_query(&self) -> &BidQueryClient<C> {
        &self.query
    }

    async fn execute(&self, msg: ExecuteMsg, opts: TxOptions) -> Result<ExecuteResult, C::Error> {
        debug!(
            contract = %self.query.contract_address,
            sender = %self.sender,
            ?msg,
            fee = ?opts.fee,
            "execute"
        );
        self.query
            .client
            .execute(
                &self.sender,
                &self.query.contract_address,
                &msg,
                opts.fee,
                opts.memo,
                opts.funds,
            )
            .await
    }
}

#[async_trait(?Send)]
impl<C: SigningCosmWasmClient> BidQuery for BidClient<C> {
    type Error = C::Error;

    fn contract_address(&self) -> &str {
        self.query.contract_address()
    }

    async fn bidding_period(&self) -> Result<BiddingPeriodResponse, Self::Error> {
        self.query.bidding_period().await
    }

    async fn bids(&self) -> Result<BidsResponse, Self::Error> {
        self.query.bids().await
    }

    async fn bid(&self, address: Addr) -> Result<BidResponse, Self::Error> {
        self.query.bid(address).await
    }
}

#[async_trait(?Send)]
impl<C: SigningCosmWasmClient> BidExecute for BidClient<C> {
    fn sender(&self) -> &str {
        &self.sender
    }

    async fn start_bidding(
        &self,
        config: BiddingPeriod,
        opts: TxOptions,
    ) -> Result<ExecuteResult, Self::Error> {
        self.execute(ExecuteMsg::StartBidding { config }, opts).await
    }

    async fn end_bidding(
        &self,
        accepted_bids: Vec<Addr>,
        withdrawal_address: Option<Addr>,
        opts: TxOptions,
    ) -> Result<ExecuteResult, Self::Error> {
        let msg = ExecuteMsg::EndBidding {
            accepted_bids,
            withdrawal_address,
        };
        self.execute(msg, opts).await
    }

    async fn place_bid(
        &self,
        address: Option<Addr>,
        opts: TxOptions,
    ) -> Result<ExecuteResult, Self::Error> {
        self.execute(ExecuteMsg::Bid { address }, opts).await
    }
}
