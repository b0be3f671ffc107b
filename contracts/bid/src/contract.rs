#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdResult,
};
use cw2::set_contract_version;

use crate::{
    admins::AdminList,
    bid::{execute_bid, execute_end_bidding, execute_start_bidding},
    error::ContractError,
    msg::{
        BidResponse, BiddingPeriodResponse, BidsResponse, ExecuteMsg, InstantiateMsg, MigrateMsg,
        QueryMsg,
    },
    state::{read_bids, ADMINS, BIDDING_PERIOD, BIDS},
};

// version info for migration info
pub const CONTRACT_NAME: &str = "crates.io:bid";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    ADMINS.save(deps.storage, &AdminList { admins: msg.admins })?;

    Ok(Response::new().add_attribute("method", "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::StartBidding { config } => execute_start_bidding(deps, env, info, config),
        ExecuteMsg::EndBidding {
            accepted_bids,
            withdrawal_address,
        } => execute_end_bidding(deps, info, accepted_bids, withdrawal_address),
        ExecuteMsg::Bid { address } => execute_bid(deps, env, info, address),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::BiddingPeriod {} => to_json_binary(&query_bidding_period(deps)?),
        QueryMsg::Bids {} => to_json_binary(&query_bids(deps)?),
        QueryMsg::Bid { address } => to_json_binary(&query_bid(deps, address)?),
    }
}

fn query_bidding_period(deps: Deps) -> StdResult<BiddingPeriodResponse> {
    let bidding_period = BIDDING_PERIOD.may_load(deps.storage)?;
    Ok(BiddingPeriodResponse { bidding_period })
}

fn query_bids(deps: Deps) -> StdResult<BidsResponse> {
    let bids = read_bids(deps.storage, Order::Descending)?;
    Ok(BidsResponse { bids })
}

fn query_bid(deps: Deps, address: Addr) -> StdResult<BidResponse> {
    let bid = BIDS.may_load(deps.storage, &address)?;
    Ok(BidResponse { bid })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
