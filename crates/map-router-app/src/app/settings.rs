use crate::app::state::TilesProvider;
use clap::Parser;
use eframe_entrypoints::parse_args;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Map Router - A desktop map application whose views are selected by a client-side route resolver
pub struct Settings {
    /// Route to open on startup (exact match, e.g. "/" or "/test")
    #[clap(short, long, value_name = "PATH")]
    pub path: Option<String>,

    /// JSON file with the route table, replacing the built-in "/" and "/test" routes
    #[clap(short, long, value_name = "FILE")]
    pub routes: Option<PathBuf>,

    /// Maximum number of history entries kept for back/forward
    #[clap(long, value_name = "N")]
    pub max_history: Option<usize>,

    /// Map tiles provider (defaults to the persisted choice, then OpenStreetMap)
    #[clap(long, value_enum)]
    pub tiles_provider: Option<TilesProvider>,

    /// Latitude the home map opens at
    #[clap(long, default_value = "40.4168", allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude the home map opens at
    #[clap(long, default_value = "-3.7038", allow_negative_numbers = true)]
    pub lon: f64,

    /// Zoom level the home map opens at
    #[clap(long, default_value = "12.0")]
    pub zoom: f64,

    /// Ignore previously persisted state and start fresh
    #[clap(long, default_value = "false")]
    pub ignore_persisted: bool,
}

impl Settings {
    /// Parse the process arguments, exiting with clap's message on error
    pub fn from_cli() -> Self {
        match parse_args::<Settings>() {
            Ok(args) => args,
            Err(e) => e.exit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe_entrypoints::parse_args_from;

    #[test]
    fn test_defaults() {
        let settings: Settings = parse_args_from(["map-router"]).unwrap();
        assert!(settings.path.is_none());
        assert!(settings.routes.is_none());
        assert!(settings.max_history.is_none());
        assert!(settings.tiles_provider.is_none());
        assert!(!settings.ignore_persisted);
    }

    #[test]
    fn test_explicit_values() {
        let settings: Settings = parse_args_from([
            "map-router",
            "--path",
            "/test",
            "--max-history",
            "10",
            "--tiles-provider",
            "otm",
            "--lon",
            "-0.1278",
            "--ignore-persisted",
        ])
        .unwrap();
        assert_eq!(settings.path.as_deref(), Some("/test"));
        assert_eq!(settings.max_history, Some(10));
        assert_eq!(settings.tiles_provider, Some(TilesProvider::OpenTopoMap));
        assert!((settings.lon + 0.1278).abs() < f64::EPSILON);
        assert!(settings.ignore_persisted);
    }
}
