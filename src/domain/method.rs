use serde::{Deserialize, Serialize};
use std::fmt;

/// Compound rate identifier as produced by carrier rate shopping,
/// e.g. `fedex:PRIORITY_OVERNIGHT`.
///
/// The service is the part after the last `:`. Identifiers without a
/// separator carry no service and never resolve against a [`MethodTable`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RateId {
    carrier: String,
    service: Option<String>,
}

impl RateId {
    pub fn new(carrier: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            carrier: carrier.into(),
            service: Some(service.into()),
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw.rsplit_once(':') {
            Some((carrier, service)) if !service.is_empty() => Self {
                carrier: carrier.to_string(),
                service: Some(service.to_string()),
            },
            _ => Self {
                carrier: raw.to_string(),
                service: None,
            },
        }
    }

    pub fn carrier(&self) -> &str {
        &self.carrier
    }

    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }
}

impl From<String> for RateId {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<RateId> for String {
    fn from(id: RateId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for RateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.service {
            Some(service) => write!(f, "{}:{}", self.carrier, service),
            None => f.write_str(&self.carrier),
        }
    }
}

/// Rules attached to one carrier service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDefinition {
    /// Service suffix matched against [`RateId::service`], case-sensitive.
    pub name: String,
    /// Safe for carts holding perishable products.
    pub perishable: bool,
    /// Offered to local customers, always free for them.
    pub local: bool,
    /// Nominal transit time in calendar days.
    pub delivery_days: u32,
}

impl MethodDefinition {
    pub fn new(name: &str, perishable: bool, local: bool, delivery_days: u32) -> Self {
        Self {
            name: name.to_string(),
            perishable,
            local,
            delivery_days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodTable(Vec<MethodDefinition>);

impl MethodTable {
    /// The FedEx services the storefront knows about.
    pub fn fedex() -> Self {
        Self(vec![
            MethodDefinition::new("PRIORITY_OVERNIGHT", true, false, 1),
            MethodDefinition::new("STANDARD_OVERNIGHT", true, false, 1),
            MethodDefinition::new("GROUND_HOME_DELIVERY", false, true, 3),
            MethodDefinition::new("FEDEX_2_DAY_AM", false, false, 2),
            MethodDefinition::new("FEDEX_2_DAY", false, false, 2),
        ])
    }

    pub fn resolve(&self, id: &RateId) -> Option<&MethodDefinition> {
        let service = id.service()?;
        self.0.iter().find(|method| method.name == service)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MethodDefinition> {
        self.0.iter()
    }
}

impl Default for MethodTable {
    fn default() -> Self {
        Self::fedex()
    }
}
