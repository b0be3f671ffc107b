use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Deps, StdResult};

use crate::state::ADMINS;

#[cw_serde]
pub struct AdminList {
    pub admins: Vec<Addr>,
}

impl AdminList {
    /// returns true if the address is a registered admin
    pub fn is_admin(&self, addr: impl AsRef<str>) -> bool {
        let addr = addr.as_ref();
        self.admins.iter().any(|a| a.as_str() == addr)
    }
}

pub fn can_execute(deps: Deps, sender: &Addr) -> StdResult<bool> {
    let admins = ADMINS.load(deps.storage)?;
    Ok(admins.is_admin(sender))
}
