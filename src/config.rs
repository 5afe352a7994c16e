use crate::domain::method::MethodTable;
use crate::domain::postal::LocalZipPolicy;
use crate::error::{Result, ShippingError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub const DEFAULT_CUTOFF_HOUR: u32 = 17;
pub const DEFAULT_LOCAL_LABEL: &str = "Free Local Shipping &nbsp;";

/// Business constants for the shipping rules.
///
/// Every field is optional in the JSON form; the defaults reproduce the
/// storefront's FedEx setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Orders placed at or after this local hour ship a day later.
    pub cutoff_hour: u32,
    pub local_zip_policy: LocalZipPolicy,
    /// Label given to local-only quotes for local customers.
    pub local_label: String,
    pub methods: MethodTable,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            cutoff_hour: DEFAULT_CUTOFF_HOUR,
            local_zip_policy: LocalZipPolicy::default(),
            local_label: DEFAULT_LOCAL_LABEL.to_string(),
            methods: MethodTable::default(),
        }
    }
}

impl RuleConfig {
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let config: Self = serde_json::from_reader(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn validate(&self) -> Result<()> {
        if self.cutoff_hour > 23 {
            return Err(ShippingError::ConfigError(format!(
                "cutoff_hour must be between 0 and 23, got {}",
                self.cutoff_hour
            )));
        }

        for range in self.local_zip_policy.ranges() {
            if range.start > range.end {
                return Err(ShippingError::ConfigError(format!(
                    "zip range {}..={} is empty",
                    range.start, range.end
                )));
            }
            if range.end > 99_999 {
                return Err(ShippingError::ConfigError(format!(
                    "zip range end {} is not a five-digit code",
                    range.end
                )));
            }
        }

        if self.methods.iter().any(|method| method.name.is_empty()) {
            return Err(ShippingError::ConfigError(
                "shipping method names must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
