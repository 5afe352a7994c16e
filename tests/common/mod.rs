use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

pub const MORNING: &str = "2026-03-04T09:00:00-05:00";
pub const EVENING: &str = "2026-03-04T17:30:00-05:00";

/// The five FedEx quotes plus one flat rate the rule table does not know.
pub fn standard_rates() -> Value {
    json!([
        {"id": "fedex:PRIORITY_OVERNIGHT", "cost": "45.10", "label": "FedEx Priority Overnight"},
        {"id": "fedex:STANDARD_OVERNIGHT", "cost": "38.00", "label": "FedEx Standard Overnight"},
        {"id": "fedex:GROUND_HOME_DELIVERY", "cost": "9.75", "label": "FedEx Home Delivery"},
        {"id": "fedex:FEDEX_2_DAY_AM", "cost": "24.30", "label": "FedEx 2Day AM"},
        {"id": "fedex:FEDEX_2_DAY", "cost": "18.40", "label": "FedEx 2Day"},
        {"id": "flat_rate:1", "cost": "6.00", "label": "Flat rate"}
    ])
}

pub fn write_request(postcode: &str, cart: Value) -> NamedTempFile {
    write_json(&json!({
        "postcode": postcode,
        "cart": cart,
        "rates": standard_rates(),
    }))
}

pub fn write_json(document: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{document}").unwrap();
    file.flush().unwrap();
    file
}
