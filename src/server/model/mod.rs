//! Domain models and operation-specific parameter types.
//!
//! Parameter structs decouple the HTTP DTO layer from repository signatures:
//! controllers convert incoming DTOs into params, services and repositories
//! only ever see params and entity models.

pub mod booking;
pub mod policy;
pub mod rates;
pub mod room;
