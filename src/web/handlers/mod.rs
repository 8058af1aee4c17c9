// HTTP handlers, one module per route.

pub mod analyze;
pub mod health;
