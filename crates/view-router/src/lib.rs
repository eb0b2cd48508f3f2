//! View Router - Client-side route resolution for single-window applications
//!
//! This library maps navigation requests (path strings) to views, drives view
//! activation and teardown through a host-provided [`ViewHost`], and keeps a
//! browser-style back/forward history.
//!
//! # Architecture
//!
//! - **[`RouteEntry`]**: `{path, name, view}` record, unique by path and by name
//! - **[`Resolver`]**: route table, exact-match lookup, history stack, active view
//! - **[`ViewHost`]**: host-side factory and lifecycle hooks for views
//! - **[`RouteSpec`]**: configuration record for building route tables
//!
//! # Example
//!
//! ```
//! use view_router::{Resolver, RouteEntry, ViewHost};
//!
//! struct Host;
//!
//! impl ViewHost for Host {
//!     type Key = &'static str;
//!     type Handle = String;
//!
//!     fn activate(&mut self, route: &RouteEntry<Self::Key>) -> String {
//!         format!("mounted {}", route.view())
//!     }
//! }
//!
//! let mut resolver = Resolver::new(Host);
//! resolver.register(RouteEntry::new("/", "Home", "MainComponent")).unwrap();
//! resolver.register(RouteEntry::new("/test", "Test", "ElecComponent")).unwrap();
//! resolver.seal();
//!
//! resolver.navigate("/").unwrap();
//! resolver.navigate("/test").unwrap();
//! resolver.back().unwrap();
//! assert_eq!(resolver.current_path().as_deref(), Some("/"));
//! ```

mod config;
mod history;
mod resolver;
mod table;
mod view;

// Public API exports
pub use config::{RouteConfig, RouteSpec};
pub use history::HistoryEntry;
pub use resolver::{Config, Resolver};
pub use table::RouteEntry;
pub use view::{ActiveView, NavigationEvent, NavigationKind, ViewHost};

/// Which unique key of a route entry collided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    Path,
    Name,
}

impl std::fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Path => f.write_str("path"),
            Self::Name => f.write_str("name"),
        }
    }
}

/// Error types for registration and navigation
///
/// All of them are local and caller-correctable; none is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("Duplicate route {field}: {value}")]
    DuplicateRoute { field: DuplicateField, value: String },

    #[error("Route table is sealed")]
    ResolverSealed,

    #[error("Route table is not sealed yet")]
    NotSealed,

    #[error("Route paths must start with '/': {0}")]
    InvalidPath(String),

    #[error("No route matches path: {0}")]
    RouteNotFound(String),

    #[error("No route named: {0}")]
    RouteNameNotFound(String),

    #[error("No history entry at offset {delta}")]
    NoHistory { delta: isize },

    #[error("Another navigation is in progress")]
    NavigationInProgress,
}

pub type Result<T> = std::result::Result<T, NavigationError>;
