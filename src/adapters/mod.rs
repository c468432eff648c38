// Adapters layer: concrete implementations for external systems
// (http, network probe, terminal output).

pub mod console;
pub mod http;
pub mod network;
