use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Bidding period is already active")]
    BiddingPeriodActive {},

    #[error("No active bidding period")]
    NoBiddingPeriod {},

    #[error("Bidding period has expired")]
    BiddingPeriodExpired {},

    #[error("Bidding period end time is in the past")]
    ExpiryInPast {},

    #[error("At least 1 bid needs to be able to be accepted")]
    NoAcceptedBidders {},

    #[error("Cannot accept {accepted} bids, the bidding period allows {allowed}")]
    TooManyAcceptedBids { accepted: u64, allowed: u64 },

    #[error("{address} is listed more than once in the accepted bids")]
    DuplicateAcceptedBid { address: String },

    #[error("No bid found for {address}")]
    BidNotFound { address: String },

    #[error("Minimum bid is {minimum}, got {amount}")]
    BidTooLow { minimum: Uint128, amount: Uint128 },
}
