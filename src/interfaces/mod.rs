//! Adapters between the engine and the outside world: checkout request
//! documents in, evaluated quotes out.

pub mod csv;
pub mod json;
