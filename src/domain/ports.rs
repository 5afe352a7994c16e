use super::cart::CartLine;
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

/// Read access to the host platform's checkout session.
#[async_trait]
pub trait CheckoutSession: Send + Sync {
    async fn cart_lines(&self) -> Result<Vec<CartLine>>;
    async fn shipping_postcode(&self) -> Result<Option<String>>;
}

/// Wall-clock source, in the storefront's local zone.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

pub type ClockBox = Box<dyn Clock>;
