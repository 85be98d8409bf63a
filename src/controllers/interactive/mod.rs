//! Latest-request-wins worker for successive frames.
//!
//! A UI or animation loop submits one viewport per frame. The worker computes the
//! newest request on a background thread, cancels a stale computation at its next
//! row boundary, and hands finished fields to a [`FieldSink`].
//!
//! # Architecture
//!
//! - **Input**: [`Viewport`](crate::Viewport) values submitted via
//!   [`FieldWorker::submit_request`]
//! - **Output**: [`FieldSink`] receiving [`FieldEvent`]s
//! - **Core**: field generation from `core::actions::compute_field`

mod controller;
pub mod data;
pub mod events;
pub mod ports;

pub use controller::FieldWorker;
pub use data::frame_data::FrameData;
pub use events::field_event::FieldEvent;
pub use ports::field_sink::FieldSink;
