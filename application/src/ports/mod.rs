//! Port definitions (interfaces to the infrastructure layer)

pub mod completion_gateway;
pub mod credential_resolver;
