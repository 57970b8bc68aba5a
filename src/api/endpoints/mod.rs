//! API endpoint handlers, one module per resource.

pub mod advocates;
pub mod health;
pub mod seed;
pub mod specialties;
