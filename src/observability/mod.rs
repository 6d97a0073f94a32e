//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (route matched, no match, navigated)
//!     → logging.rs (subscriber, filter, stderr output)
//!
//! HTTP requests additionally get spans from tower-http's TraceLayer.
//! ```

pub mod logging;
