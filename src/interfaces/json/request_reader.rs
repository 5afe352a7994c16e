use crate::domain::cart::CartLine;
use crate::domain::rate::RateQuote;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemorySession;
use serde::Deserialize;
use std::io::Read;

/// One checkout as handed over by the host platform: the customer's
/// postcode, the cart snapshot and the carrier quotes to evaluate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub cart: Vec<CartLine>,
    #[serde(default)]
    pub rates: Vec<RateQuote>,
}

impl CheckoutRequest {
    /// Reads a request document from any `Read` source (e.g., File, Stdin).
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }

    /// Splits the request into the session snapshot and the quotes.
    pub fn into_parts(self) -> (InMemorySession, Vec<RateQuote>) {
        (InMemorySession::new(self.cart, self.postcode), self.rates)
    }
}
