use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Env, Order, StdResult, Storage, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

use crate::admins::AdminList;

pub const ADMINS: Item<AdminList> = Item::new("admins");
pub const BIDDING_PERIOD: Item<BiddingPeriod> = Item::new("bidding_period");
pub const BIDS: Map<&Addr, Bid> = Map::new("bids");

#[cw_serde]
pub struct Bid {
    pub bidder: Addr,
    /// Amount in base units of the bidding period denom
    pub amount: Uint128,
}

#[cw_serde]
pub struct BiddingPeriod {
    pub name: String,
    pub description: Option<String>,
    /// Bids at or after this time are rejected
    pub expires_at: Timestamp,
    pub minimum_bid: Uint128,
    /// Maximum number of bids that can be accepted when the period ends
    pub accepted_bidders: u64,
    pub denom: String,
}

impl BiddingPeriod {
    pub fn expired(&self, env: &Env) -> bool {
        env.block.time >= self.expires_at
    }
}

pub fn read_bids(storage: &dyn Storage, order: Order) -> StdResult<Vec<Bid>> {
    BIDS.range(storage, None, None, order)
        .map(|item| item.map(|(_, bid)| bid))
        .collect()
}

/// Adds `amount` to the bid held by `bidder`, creating it if needed.
pub fn add_to_bid(storage: &mut dyn Storage, bidder: &Addr, amount: Uint128) -> StdResult<Bid> {
    BIDS.update(storage, bidder, |bid| -> StdResult<Bid> {
        let mut bid = bid.unwrap_or_else(|| Bid {
            bidder: bidder.clone(),
            amount: Uint128::zero(),
        });
        bid.amount = bid.amount.checked_add(amount)?;
        Ok(bid)
    })
}
