//! Delivery config document model
//!
//! Typed view of the delivery config: the fields the preprocessor reads or
//! writes are modeled explicitly, everything else rides along in pass-through
//! bags and round-trips untouched.

pub mod models;

pub use models::{DeliveryConfig, Environment, Resource, ResourceSpec};
