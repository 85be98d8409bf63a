//! Port definitions for the interactive controller.
//!
//! Contains trait definitions that define interfaces between the controller
//! and whatever consumes finished fields (a renderer, a recorder, a test double).

pub mod field_sink;
