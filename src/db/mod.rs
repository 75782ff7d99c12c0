//! Data access: entities, domain models and the model implementations
//! the gateway operations run against.

pub mod entities;
pub mod memory;
pub mod model;
pub mod models;
pub mod postgres;
