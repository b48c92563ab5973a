// src/mcp/mod.rs
pub mod capabilities;
pub mod error;
pub mod handler;
pub mod protocol;
pub mod registry;
pub mod schema;

pub use handler::CapabilityDispatcher;
pub use registry::{Capability, CapabilityContext, CapabilityRegistry};
