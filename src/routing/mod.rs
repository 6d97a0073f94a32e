//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming location ("/app/operadora/123?aba=despesas")
//!     → location.rs (split path / query / hash)
//!     → history.rs (strip base path)
//!     → router.rs (route lookup, declaration order)
//!     → matcher.rs (evaluate pattern, bind params)
//!     → Return: RouteMatch or no match
//!
//! Named navigation ("details", { cnpj })
//!     → router.rs (find route by name)
//!     → pattern.rs (substitute params)
//!     → history.rs (prefix base path)
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → Check unique names and paths
//!     → Parse patterns, compile matchers
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (segment comparison only)
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)

pub mod history;
pub mod location;
pub mod matcher;
pub mod pattern;
pub mod router;

pub use history::WebHistory;
pub use location::Location;
pub use pattern::{Params, PathPattern};
pub use router::{NavigationError, Route, RouteMatch, RouteTable, RouteTableError};
