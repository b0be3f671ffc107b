use cosmwasm_std::{coins, Addr, Coin, Empty, Uint128};
use cw_multi_test::{App, AppBuilder, Contract, ContractWrapper, Executor};

use crate::{
    helper::BidContract,
    msg::{BidsResponse, ExecuteMsg, InstantiateMsg, QueryMsg},
    state::BiddingPeriod,
};

const ADMIN: &str = "juno1admin";
const BIDDER: &str = "juno1bidder";
const OTHER_BIDDER: &str = "juno1otherbidder";
const TREASURY: &str = "juno1treasury";
const DENOM: &str = "ujunox";

fn bid_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        crate::contract::execute,
        crate::contract::instantiate,
        crate::contract::query,
    )
    .with_migrate(crate::contract::migrate);
    Box::new(contract)
}

fn mock_app() -> App {
    AppBuilder::new().build(|router, _, storage| {
        for (addr, amount) in [(BIDDER, 1500u128), (OTHER_BIDDER, 500u128)] {
            router
                .bank
                .init_balance(storage, &Addr::unchecked(addr), coins(amount, DENOM))
                .unwrap();
        }
    })
}

fn proper_instantiate() -> (App, BidContract) {
    let mut app = mock_app();
    let code_id = app.store_code(bid_contract());

    let addr = app
        .instantiate_contract(
            code_id,
            Addr::unchecked(ADMIN),
            &InstantiateMsg {
                admins: vec![Addr::unchecked(ADMIN)],
            },
            &[],
            "bid",
            None,
        )
        .unwrap();

    (app, BidContract(addr))
}

fn start_bidding(app: &mut App, contract: &BidContract) {
    let config = BiddingPeriod {
        name: "My Bidding Period".to_string(),
        description: None,
        expires_at: app.block_info().time.plus_seconds(1440),
        minimum_bid: Uint128::new(500),
        accepted_bidders: 1,
        denom: DENOM.to_string(),
    };
    let msg = contract
        .call(ExecuteMsg::StartBidding { config }, vec![])
        .unwrap();
    app.execute(Addr::unchecked(ADMIN), msg).unwrap();
}

fn bid(app: &mut App, contract: &BidContract, sender: &str, funds: Vec<Coin>) {
    let msg = contract
        .call(ExecuteMsg::Bid { address: None }, funds)
        .unwrap();
    app.execute(Addr::unchecked(sender), msg).unwrap();
}

fn balance(app: &App, addr: &str) -> Uint128 {
    app.wrap()
        .query_balance(Addr::unchecked(addr), DENOM)
        .unwrap()
        .amount
}

#[test]
fn try_end_bidding() {
    let (mut app, contract) = proper_instantiate();
    start_bidding(&mut app, &contract);

    bid(&mut app, &contract, BIDDER, coins(1000, DENOM));
    bid(&mut app, &contract, OTHER_BIDDER, coins(500, DENOM));
    assert_eq!(balance(&app, contract.addr().as_str()), Uint128::new(1500));

    let bids = contract.bids(&app.wrap()).unwrap();
    assert_eq!(bids.bids.len(), 2);

    let msg = contract
        .call(
            ExecuteMsg::EndBidding {
                accepted_bids: vec![Addr::unchecked(BIDDER)],
                withdrawal_address: None,
            },
            vec![],
        )
        .unwrap();
    app.execute(Addr::unchecked(ADMIN), msg).unwrap();

    // the accepted bid goes to the admin, the other one is refunded
    assert_eq!(balance(&app, ADMIN), Uint128::new(1000));
    assert_eq!(balance(&app, OTHER_BIDDER), Uint128::new(500));
    assert_eq!(balance(&app, BIDDER), Uint128::new(500));
    assert_eq!(balance(&app, contract.addr().as_str()), Uint128::zero());

    let period = contract.bidding_period(&app.wrap()).unwrap();
    assert_eq!(period.bidding_period, None);
}

#[test]
fn try_end_bidding_to_withdrawal_address() {
    let (mut app, contract) = proper_instantiate();
    start_bidding(&mut app, &contract);
    bid(&mut app, &contract, BIDDER, coins(1000, DENOM));

    app.execute_contract(
        Addr::unchecked(ADMIN),
        contract.addr(),
        &ExecuteMsg::EndBidding {
            accepted_bids: vec![Addr::unchecked(BIDDER)],
            withdrawal_address: Some(Addr::unchecked(TREASURY)),
        },
        &[],
    )
    .unwrap();

    assert_eq!(balance(&app, TREASURY), Uint128::new(1000));
    assert_eq!(balance(&app, ADMIN), Uint128::zero());
}

#[test]
fn try_proxy_bid() {
    let (mut app, contract) = proper_instantiate();
    start_bidding(&mut app, &contract);

    let msg = contract
        .call(
            ExecuteMsg::Bid {
                address: Some(Addr::unchecked(OTHER_BIDDER)),
            },
            coins(1000, DENOM),
        )
        .unwrap();
    app.execute(Addr::unchecked(BIDDER), msg).unwrap();

    let res = contract
        .bid(&app.wrap(), Addr::unchecked(OTHER_BIDDER))
        .unwrap();
    assert_eq!(res.bid.unwrap().amount, Uint128::new(1000));

    let res: BidsResponse = app
        .wrap()
        .query_wasm_smart(contract.addr(), &QueryMsg::Bids {})
        .unwrap();
    assert_eq!(res.bids.len(), 1);
}

#[test]
fn failed_bid_keeps_funds() {
    let (mut app, contract) = proper_instantiate();
    start_bidding(&mut app, &contract);

    let msg = contract
        .call(ExecuteMsg::Bid { address: None }, coins(100, DENOM))
        .unwrap();
    app.execute(Addr::unchecked(BIDDER), msg).unwrap_err();

    assert_eq!(balance(&app, BIDDER), Uint128::new(1500));
}
