use super::money::Cost;
use super::postal::LocalZipPolicy;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// One cart line with the product metadata the shipping rules read.
///
/// Product metadata is whatever the storefront stored, so it is read
/// leniently: missing, null or unparseable values fall back to
/// "not perishable", a zero reduction and a zero quantity instead of
/// failing the checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(default)]
    pub product_id: u64,
    #[serde(default, deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub perishable: bool,
    #[serde(default, deserialize_with = "deserialize_reduction")]
    pub rate_reduction: Cost,
}

fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let quantity = match Value::deserialize(deserializer)? {
        Value::Number(n) => match (n.as_u64(), n.as_f64()) {
            (Some(whole), _) => u32::try_from(whole).unwrap_or(u32::MAX),
            // Float-to-int `as` saturates
            (None, Some(float)) if float > 0.0 => float as u32,
            _ => 0,
        },
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u32>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| *f > 0.0).map(|f| f as u32))
                .unwrap_or(0)
        }
        _ => 0,
    };
    Ok(quantity)
}

/// Truthiness of a stored meta value: null, false, 0, "", "0" and empty
/// arrays are false, anything else is true.
fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let truthy = match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    };
    Ok(truthy)
}

fn deserialize_reduction<'de, D>(deserializer: D) -> Result<Cost, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Value::deserialize(deserializer)? {
        Value::Number(n) => {
            if let Some(int) = n.as_i64() {
                Some(Decimal::from(int))
            } else if let Some(uint) = n.as_u64() {
                Some(Decimal::from(uint))
            } else {
                n.as_f64().and_then(Decimal::from_f64)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            Decimal::from_str(s)
                .or_else(|_| Decimal::from_scientific(s))
                .ok()
        }
        Value::Bool(true) => Some(Decimal::ONE),
        _ => None,
    };
    Ok(Cost::new(amount.unwrap_or_default()))
}

impl CartLine {
    pub fn new(product_id: u64, quantity: u32, perishable: bool, rate_reduction: Cost) -> Self {
        Self {
            product_id,
            quantity,
            perishable,
            rate_reduction,
        }
    }
}

/// Aggregates derived from a cart snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartTotals {
    /// Sum of per-unit reduction times quantity.
    pub reduced_amount: Cost,
    /// True if any line is perishable.
    pub perishable: bool,
}

pub fn compute_reduced_amount_total(lines: &[CartLine]) -> CartTotals {
    CartTotals {
        reduced_amount: lines
            .iter()
            .map(|line| line.rate_reduction * line.quantity)
            .sum(),
        perishable: lines.iter().any(|line| line.perishable),
    }
}

/// Everything the rate rules need about one checkout, computed once.
///
/// Build a fresh context for every checkout evaluation; nothing here is
/// shared between requests.
#[derive(Debug, Clone, PartialEq)]
pub struct CartContext {
    pub perishable: bool,
    pub reduced_amount: Cost,
    pub postal_code: String,
    pub local: bool,
}

impl CartContext {
    pub fn new(lines: &[CartLine], postal_code: Option<&str>, policy: &LocalZipPolicy) -> Self {
        let totals = compute_reduced_amount_total(lines);
        let postal_code = postal_code.unwrap_or_default().to_string();
        let local = policy.is_local_postal_code(&postal_code);

        Self {
            perishable: totals.perishable,
            reduced_amount: totals.reduced_amount,
            postal_code,
            local,
        }
    }
}
