//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), optional
//!     → loader.rs (parse & deserialize, BASE_URL override)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → RouteTable + WebHistory built once at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no runtime route registration
//! - All fields have defaults; an empty file yields the declared routes
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, load_config, ConfigError};
pub use schema::{HistoryConfig, ListenerConfig, ObservabilityConfig, RouteConfig, RouterConfig};
