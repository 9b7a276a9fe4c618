//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row and a `Deserialize` create DTO for inserts. Neither
//! entity supports in-place updates through the exposed interface.

pub mod contact;
pub mod project;
