// Adapters layer: concrete implementations for external systems.

pub mod stripe;
