//! Centralized user-facing message catalog.
//!
//! All text printed by jiratt is defined here as `Message` variants with a
//! `Display` implementation, and routed through the `msg_*` macros which
//! switch between plain console output and the tracing system.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
