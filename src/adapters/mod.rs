// Adapters layer: concrete implementations for external systems (HTTP, output rendering).

pub mod http;
pub mod output;
