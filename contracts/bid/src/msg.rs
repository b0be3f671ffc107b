use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

use crate::state::{Bid, BiddingPeriod};

#[cw_serde]
pub struct InstantiateMsg {
    pub admins: Vec<Addr>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Admin only. Opens a new bidding period, fails if one is already open.
    StartBidding { config: BiddingPeriod },
    /// Admin only. Closes the current bidding period.
    /// Accepted bids are withdrawn to `withdrawal_address`, or to the sender when
    /// it is omitted. Every other bid is refunded to its bidder.
    EndBidding {
        accepted_bids: Vec<Addr>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        withdrawal_address: Option<Addr>,
    },
    /// Places a bid with the attached funds, on behalf of `address` if given.
    Bid {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address: Option<Addr>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(BiddingPeriodResponse)]
    BiddingPeriod {},
    #[returns(BidsResponse)]
    Bids {},
    #[returns(BidResponse)]
    Bid { address: Addr },
}

#[cw_serde]
pub struct BiddingPeriodResponse {
    pub bidding_period: Option<BiddingPeriod>,
}

#[cw_serde]
pub struct BidsResponse {
    pub bids: Vec<Bid>,
}

#[cw_serde]
pub struct BidResponse {
    pub bid: Option<Bid>,
}

#[cw_serde]
pub struct MigrateMsg {}
