use super::method::RateId;
use super::money::Cost;
use serde::{Deserialize, Serialize};

/// A priced shipping option offered for one checkout.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct RateQuote {
    pub id: RateId,
    pub cost: Cost,
    #[serde(default)]
    pub label: String,
}

impl RateQuote {
    pub fn new(id: RateId, cost: Cost, label: impl Into<String>) -> Self {
        Self {
            id,
            cost,
            label: label.into(),
        }
    }
}
