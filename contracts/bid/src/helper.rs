use cosmwasm_std::{
    to_json_binary, Addr, Coin, CosmosMsg, CustomQuery, QuerierWrapper, StdResult, WasmMsg,
};

use crate::msg::{BidResponse, BiddingPeriodResponse, BidsResponse, ExecuteMsg, QueryMsg};

/// BidContract is a wrapper around Addr that provides helpers for calling
/// the bid contract from other contracts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BidContract(pub Addr);

impl BidContract {
    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call<T: Into<ExecuteMsg>>(&self, msg: T, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.addr().into(),
            msg: to_json_binary(&msg.into())?,
            funds,
        }
        .into())
    }

    pub fn bidding_period<Q: CustomQuery>(
        &self,
        querier: &QuerierWrapper<Q>,
    ) -> StdResult<BiddingPeriodResponse> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::BiddingPeriod {})
    }

    pub fn bids<Q: CustomQuery>(&self, querier: &QuerierWrapper<Q>) -> StdResult<BidsResponse> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::Bids {})
    }

    pub fn bid<Q: CustomQuery>(
        &self,
        querier: &QuerierWrapper<Q>,
        address: Addr,
    ) -> StdResult<BidResponse> {
        querier.query_wasm_smart(self.addr(), &QueryMsg::Bid { address })
    }
}
