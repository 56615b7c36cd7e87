// Domain layer: request/response schemas and the collaborator ports.

pub mod model;
pub mod ports;
