//! Application state management
//!
//! This module holds the UI-side state that lives outside the resolver:
//! queued navigation requests, the address bar, the last navigation error,
//! and the settings persisted between runs.

use view_router::NavigationError;

/// Main application state
pub struct AppState {
    /// Navigation requested by the UI this frame, applied before the next one
    pub pending: Option<NavRequest>,

    /// Outcome of the last navigation attempt, shown until the next success
    pub last_error: Option<NavigationError>,

    /// Text of the address bar
    pub address: String,

    /// Map tiles provider
    pub tiles_provider: TilesProvider,

    /// Whether to show the help overlay
    pub show_help: bool,

    /// Whether to show profiling controls in the diagnostics view
    pub show_profiling: bool,
}

impl AppState {
    pub fn new(tiles_provider: TilesProvider) -> Self {
        Self {
            pending: None,
            last_error: None,
            address: String::new(),
            tiles_provider,
            show_help: false,
            show_profiling: false,
        }
    }

    /// Queue a navigation; the latest request of a frame wins
    pub fn request(&mut self, request: NavRequest) {
        if let Some(previous) = self.pending.replace(request) {
            tracing::trace!("Dropping superseded navigation request {previous:?}");
        }
    }
}

/// A navigation triggered from the UI
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavRequest {
    Path(String),
    Back,
    Forward,
    /// Jump by an offset relative to the history cursor
    Go(isize),
}

/// Available map tile providers
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize,
)]
pub enum TilesProvider {
    #[value(name = "osm")]
    OpenStreetMap,
    #[value(name = "otm")]
    OpenTopoMap,
}

impl TilesProvider {
    pub fn attribution(&self) -> &'static str {
        match self {
            Self::OpenStreetMap => "© OpenStreetMap contributors",
            Self::OpenTopoMap => "© OpenTopoMap (CC-BY-SA)",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::OpenStreetMap, Self::OpenTopoMap]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenStreetMap => "OpenStreetMap",
            Self::OpenTopoMap => "OpenTopoMap",
        }
    }
}

/// Persisted settings (lightweight, no history)
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PersistedSettings {
    /// Path that was current on exit
    pub last_path: Option<String>,
    pub tiles_provider: TilesProvider,
}

impl PersistedSettings {
    pub const KEY: &'static str = "persisted_settings";

    pub fn from_json(json: &str) -> Option<Self> {
        if json.is_empty() {
            return None;
        }
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(err) => {
                tracing::warn!("Ignoring unreadable persisted settings: {err}");
                None
            }
        }
    }
}
