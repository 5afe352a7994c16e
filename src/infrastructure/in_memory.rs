use crate::domain::cart::CartLine;
use crate::domain::ports::{CheckoutSession, Clock};
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

/// A checkout session backed by an already materialized snapshot.
///
/// Used by the CLI for request documents and by tests in place of the host
/// platform's cart and customer profile.
#[derive(Debug, Default, Clone)]
pub struct InMemorySession {
    lines: Vec<CartLine>,
    postcode: Option<String>,
}

impl InMemorySession {
    pub fn new(lines: Vec<CartLine>, postcode: Option<String>) -> Self {
        Self { lines, postcode }
    }
}

#[async_trait]
impl CheckoutSession for InMemorySession {
    async fn cart_lines(&self) -> Result<Vec<CartLine>> {
        Ok(self.lines.clone())
    }

    async fn shipping_postcode(&self) -> Result<Option<String>> {
        Ok(self.postcode.clone())
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }

    /// Freezes the clock at an RFC 3339 timestamp such as
    /// `2026-03-04T16:59:00-05:00`. The offset becomes the local zone.
    pub fn parse_rfc3339(raw: &str) -> Result<Self> {
        Ok(Self::new(DateTime::parse_from_rfc3339(raw)?))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}
