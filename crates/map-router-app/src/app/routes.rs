//! Route table configuration for the application
//!
//! The built-in table has the two routes the application ships with. A JSON
//! file with the same shape can replace it:
//!
//! ```json
//! { "routes": [ { "path": "/", "name": "Home", "view": "home" } ],
//!   "resolver": { "max_history": 50 } }
//! ```

use crate::app::views::ViewKind;
use std::path::Path;
use thiserror::Error;
use view_router::{RouteConfig, RouteSpec};

#[derive(Error, Debug)]
pub enum RouteFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The "/" (map) and "/test" (diagnostics) routes
pub fn default_routes() -> RouteConfig<ViewKind> {
    RouteConfig::new(vec![
        RouteSpec::new("/", "Home", ViewKind::Home),
        RouteSpec::new("/test", "Test", ViewKind::Test),
    ])
}

pub fn parse_routes(json: &str) -> Result<RouteConfig<ViewKind>, RouteFileError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_route_file(path: &Path) -> Result<RouteConfig<ViewKind>, RouteFileError> {
    let json = std::fs::read_to_string(path)?;
    let config = parse_routes(&json)?;
    tracing::info!(
        "Loaded {} routes from {}",
        config.routes.len(),
        path.display()
    );
    Ok(config)
}
