//! Shipping rule domain: quotes, carrier services, cart aggregates and the
//! local postal code policy, plus the ports the host platform implements.

pub mod cart;
pub mod method;
pub mod money;
pub mod ports;
pub mod postal;
pub mod rate;
