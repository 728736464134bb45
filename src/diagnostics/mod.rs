// SPDX-License-Identifier: MPL-2.0
//! Diagnostics log for notification lifecycle events.
//!
//! The notification store reports what happens to each toast (shown,
//! duplicate suppressed, evicted, dismissed) through a [`DiagnosticsHandle`].
//! Events travel over a bounded channel into a [`DiagnosticsCollector`],
//! which keeps them in a memory-bounded [`CircularBuffer`] and can export
//! them as JSON. The dashboard's activity panel reads from the collector.

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, DismissReason};
