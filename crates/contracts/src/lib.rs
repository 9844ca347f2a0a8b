//! Shared contracts: declarative entity metadata and the report DTOs
//! exchanged over the API.

pub mod shared;
pub mod system;
