//! Application layer orchestrating the shipping rules.
//!
//! This module defines the `ShippingRuleEngine`, the single entry point the
//! checkout pipeline composes and calls at its rate and label extension points.

pub mod engine;
