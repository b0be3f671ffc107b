use cosmwasm_std::{Coin, Uint64};
use serde::{ser::Error, Deserialize, Serialize, Serializer};

/// How the chain client should pay for an execute transaction.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Fee {
    /// Let the chain client simulate and estimate the fee.
    #[default]
    Auto,
    /// Estimate, then scale the estimated gas by this factor. Must be finite,
    /// encoding a NaN or infinite multiplier fails.
    Multiplier(f64),
    /// Pay exactly this fee.
    Std(StdFee),
}

// Encodes the way signing clients take it: "auto", a bare number, or the fee object.
impl Serialize for Fee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Fee::Auto => serializer.serialize_str("auto"),
            Fee::Multiplier(multiplier) if multiplier.is_finite() => {
                serializer.serialize_f64(*multiplier)
            }
            Fee::Multiplier(multiplier) => Err(S::Error::custom(format!(
                "gas multiplier must be finite, got {}",
                multiplier
            ))),
            Fee::Std(fee) => fee.serialize(serializer),
        }
    }
}

impl From<StdFee> for Fee {
    fn from(fee: StdFee) -> Self {
        Fee::Std(fee)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: Uint64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,
}

impl StdFee {
    pub fn new(amount: Vec<Coin>, gas: u64) -> Self {
        StdFee {
            amount,
            gas: Uint64::new(gas),
            granter: None,
            payer: None,
        }
    }
}

/// Optional parameters of an execute call. The default estimates the fee
/// automatically and sends no memo and no funds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TxOptions {
    pub fee: Fee,
    pub memo: Option<String>,
    pub funds: Option<Vec<Coin>>,
}

impl TxOptions {
    pub fn with_fee(mut self, fee: impl Into<Fee>) -> Self {
        self.fee = fee.into();
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn with_funds(mut self, funds: Vec<Coin>) -> Self {
        self.funds = Some(funds);
        self
    }
}
