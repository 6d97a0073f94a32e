//! HTTP shell hosting subsystem.
//!
//! # Data Flow
//! ```text
//! GET /app/operadora/123
//!     → server.rs (Axum setup, tracing layer)
//!     → shell::resolve (strip base, match route, bind props)
//!     → response.rs (HTML shell + embedded route state)
//!     → Send to client (200 or 404)
//! ```

pub mod response;
pub mod server;

pub use server::{AppState, ShellServer};
