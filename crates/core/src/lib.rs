//! Domain layer shared by the database and HTTP crates.
//!
//! Holds the error taxonomy, shared type aliases, the credential gate,
//! upload filename handling, and the flash-message payload type.

pub mod credentials;
pub mod error;
pub mod flash;
pub mod types;
pub mod uploads;
