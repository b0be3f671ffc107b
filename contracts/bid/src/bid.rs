use cosmwasm_std::{
    coins, Addr, BankMsg, DepsMut, Env, MessageInfo, Order, Response, StdError, Uint128,
};
use cw_utils::must_pay;

use crate::{
    admins::can_execute,
    error::ContractError,
    state::{add_to_bid, read_bids, BiddingPeriod, BIDDING_PERIOD, BIDS},
};

pub fn execute_start_bidding(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    config: BiddingPeriod,
) -> Result<Response, ContractError> {
    if !can_execute(deps.as_ref(), &info.sender)? {
        return Err(ContractError::Unauthorized {});
    }

    if BIDDING_PERIOD.may_load(deps.storage)?.is_some() {
        return Err(ContractError::BiddingPeriodActive {});
    }

    if config.expired(&env) {
        return Err(ContractError::ExpiryInPast {});
    }

    if config.accepted_bidders == 0 {
        return Err(ContractError::NoAcceptedBidders {});
    }

    BIDDING_PERIOD.save(deps.storage, &config)?;

    Ok(Response::new().add_attributes(vec![
        ("method", "start_bidding".to_string()),
        ("bidding_period_name", config.name),
        (
            "bidding_period_description",
            config.description.unwrap_or_else(|| "null".to_string()),
        ),
        ("bidding_period_expires_at", config.expires_at.to_string()),
        (
            "bidding_period_accepted_bidders",
            config.accepted_bidders.to_string(),
        ),
    ]))
}

pub fn execute_end_bidding(
    deps: DepsMut,
    info: MessageInfo,
    accepted_bids: Vec<Addr>,
    withdrawal_address: Option<Addr>,
) -> Result<Response, ContractError> {
    if !can_execute(deps.as_ref(), &info.sender)? {
        return Err(ContractError::Unauthorized {});
    }

    let bidding_period = BIDDING_PERIOD
        .may_load(deps.storage)?
        .ok_or(ContractError::NoBiddingPeriod {})?;

    if accepted_bids.len() as u64 > bidding_period.accepted_bidders {
        return Err(ContractError::TooManyAcceptedBids {
            accepted: accepted_bids.len() as u64,
            allowed: bidding_period.accepted_bidders,
        });
    }

    let mut seen: Vec<&Addr> = Vec::with_capacity(accepted_bids.len());
    for address in &accepted_bids {
        if seen.contains(&address) {
            return Err(ContractError::DuplicateAcceptedBid {
                address: address.to_string(),
            });
        }
        seen.push(address);
    }

    // keep the funds of the accepted bids
    let mut withdrawn = Uint128::zero();
    for address in &accepted_bids {
        let bid = BIDS
            .may_load(deps.storage, address)?
            .ok_or_else(|| ContractError::BidNotFound {
                address: address.to_string(),
            })?;
        withdrawn = withdrawn
            .checked_add(bid.amount)
            .map_err(StdError::from)?;
        BIDS.remove(deps.storage, address);
    }

    // refund everyone else
    let refunds: Vec<BankMsg> = read_bids(deps.storage, Order::Ascending)?
        .into_iter()
        .filter(|bid| !bid.amount.is_zero())
        .map(|bid| BankMsg::Send {
            to_address: bid.bidder.to_string(),
            amount: coins(bid.amount.u128(), &bidding_period.denom),
        })
        .collect();

    BIDS.clear(deps.storage);
    BIDDING_PERIOD.remove(deps.storage);

    let mut response = Response::new()
        .add_attribute("method", "end_bidding")
        .add_attribute("withdrawn", withdrawn.to_string())
        .add_messages(refunds);

    if !withdrawn.is_zero() {
        let recipient = withdrawal_address.unwrap_or(info.sender);
        response = response.add_message(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: coins(withdrawn.u128(), bidding_period.denom),
        });
    }

    Ok(response)
}

pub fn execute_bid(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    address: Option<Addr>,
) -> Result<Response, ContractError> {
    let bidding_period = BIDDING_PERIOD
        .may_load(deps.storage)?
        .ok_or(ContractError::NoBiddingPeriod {})?;

    if bidding_period.expired(&env) {
        return Err(ContractError::BiddingPeriodExpired {});
    }

    let amount = must_pay(&info, &bidding_period.denom)?;
    if amount < bidding_period.minimum_bid {
        return Err(ContractError::BidTooLow {
            minimum: bidding_period.minimum_bid,
            amount,
        });
    }

    let bidder = address.unwrap_or(info.sender);
    let bid = add_to_bid(deps.storage, &bidder, amount)?;

    Ok(Response::new()
        .add_attribute("method", "bid")
        .add_attribute("address", bidder)
        .add_attribute("amount", amount.to_string())
        .add_attribute("new_amount", bid.amount.to_string()))
}
