//! Application module
//!
//! This module wires the route resolver into an eframe window:
//! - A top navigation bar (back/forward, address bar, route buttons)
//! - The view mounted by the resolver in the central panel
//! - A "not found" panel when the requested path matches no route
//! - Persisted last path and tiles provider between runs

mod plugin;
pub(crate) mod routes;
pub(crate) mod settings;
mod state;
mod ui_panels;
mod views;

use crate::app::settings::Settings;
use crate::app::state::{AppState, NavRequest, PersistedSettings, TilesProvider};
use crate::app::views::{MountedView, ViewMounter};
use eframe::egui;
use view_router::{NavigationError, Resolver};
use walkers::{
    HttpTiles, TileId,
    sources::{Attribution, OpenStreetMap, TileSource},
};

/// Custom OpenTopoMap tile source
pub struct OpenTopoMap;

impl TileSource for OpenTopoMap {
    fn tile_url(&self, tile_id: TileId) -> String {
        format!(
            "https://tile.opentopomap.org/{}/{}/{}.png",
            tile_id.zoom, tile_id.x, tile_id.y
        )
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: "© OpenTopoMap (CC-BY-SA)",
            url: "https://opentopomap.org/",
            logo_light: None,
            logo_dark: None,
        }
    }

    fn max_zoom(&self) -> u8 {
        17 // OpenTopoMap has max zoom of 17
    }
}

/// Main application structure
pub struct MapRouterApp {
    /// Route table, history, and the mounted view
    resolver: Resolver<ViewMounter>,

    /// UI state outside the resolver
    state: AppState,

    /// Map tiles provider (OpenStreetMap)
    tiles_osm: HttpTiles,

    /// Map tiles provider (OpenTopoMap)
    tiles_otm: HttpTiles,
}

impl MapRouterApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = Settings::from_cli();

        let persisted = if settings.ignore_persisted {
            tracing::info!("Ignoring persisted state (--ignore-persisted flag)");
            None
        } else {
            cc.storage
                .and_then(|storage| storage.get_string(PersistedSettings::KEY))
                .and_then(|json| PersistedSettings::from_json(&json))
        };

        let tiles_provider = settings
            .tiles_provider
            .or(persisted.as_ref().map(|p| p.tiles_provider))
            .unwrap_or(TilesProvider::OpenStreetMap);

        let initial_path = settings
            .path
            .clone()
            .or_else(|| persisted.and_then(|p| p.last_path))
            .unwrap_or_else(|| "/".to_string());

        let mut app = Self {
            resolver: Self::build_resolver(&settings),
            state: AppState::new(tiles_provider),
            tiles_osm: HttpTiles::new(OpenStreetMap, cc.egui_ctx.clone()),
            tiles_otm: HttpTiles::new(OpenTopoMap, cc.egui_ctx.clone()),
        };

        tracing::info!("Opening {initial_path}");
        app.state.request(NavRequest::Path(initial_path));
        app.apply_pending();
        app
    }

    /// Register the configured routes and seal the table
    ///
    /// Invalid or duplicate entries are skipped so the first registration of a
    /// path or name wins.
    fn build_resolver(settings: &Settings) -> Resolver<ViewMounter> {
        let mut config = match &settings.routes {
            Some(path) => routes::load_route_file(path).unwrap_or_else(|err| {
                tracing::error!(
                    "Failed to load routes from {}: {err}; using built-in routes",
                    path.display()
                );
                routes::default_routes()
            }),
            None => routes::default_routes(),
        };
        if settings.max_history.is_some() {
            config.resolver.max_history = settings.max_history;
        }

        let mounter = ViewMounter::new(settings.lat, settings.lon, settings.zoom);
        let mut resolver = Resolver::with_config(mounter, config.resolver);
        for spec in config.routes {
            if let Err(err) = resolver.register(spec.into()) {
                tracing::warn!("Skipping route: {err}");
            }
        }
        resolver.on_navigate(|event| {
            tracing::info!(
                "Navigation {:?}: {} -> {}",
                event.kind,
                event.from.as_deref().unwrap_or("(none)"),
                event.to
            );
        });
        resolver.seal();
        resolver
    }

    /// Apply the navigation queued by the UI, if any
    fn apply_pending(&mut self) {
        let Some(request) = self.state.pending.take() else {
            return;
        };

        let result = match &request {
            NavRequest::Path(path) => self.resolver.navigate(path),
            NavRequest::Back => self.resolver.back(),
            NavRequest::Forward => self.resolver.forward(),
            NavRequest::Go(delta) => self.resolver.go(*delta),
        };

        match result {
            Ok(view) => {
                self.state.address = view.path;
                self.state.last_error = None;
            }
            Err(err) => {
                tracing::warn!("Navigation {request:?} failed: {err}");
                self.state.last_error = Some(err);
            }
        }
    }
}

#[profiling::all_functions]
impl eframe::App for MapRouterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        ctx.input(|i| {
            if i.key_pressed(egui::Key::F1) {
                self.state.show_help = !self.state.show_help;
            }
            if i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft) {
                self.state.request(NavRequest::Back);
            }
            if i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight) {
                self.state.request(NavRequest::Forward);
            }
        });

        self.apply_pending();

        ui_panels::nav_bar(ctx, &mut self.state, &self.resolver);

        if self.state.show_help {
            ui_panels::help_overlay(ctx, &mut self.state.show_help);
        }

        let tiles_provider = self.state.tiles_provider;
        let not_found = match &self.state.last_error {
            Some(NavigationError::RouteNotFound(path)) => Some(path.clone()),
            _ => None,
        };

        // Central panel: the mounted view (full screen)
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                profiling::scope!("view_panel");

                if let Some(path) = not_found {
                    ui_panels::not_found(ui, &path, &mut self.state);
                    return;
                }

                let tiles: &mut HttpTiles = match tiles_provider {
                    TilesProvider::OpenStreetMap => &mut self.tiles_osm,
                    TilesProvider::OpenTopoMap => &mut self.tiles_otm,
                };
                let resolver = &self.resolver;
                let state = &mut self.state;

                let rendered = resolver.with_active_mut(|route, view| match view {
                    MountedView::Home(home) => {
                        ui_panels::home_view(ui, route, home, tiles, tiles_provider)
                    }
                    MountedView::Test(test) => ui_panels::test_view(ui, test, resolver, state),
                });
                if rendered.is_none() {
                    ui_panels::empty_view(ui);
                }
            });

        // Navigation requested this frame is applied on the next one
        if self.state.pending.is_some() {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let settings = PersistedSettings {
            last_path: self.resolver.current_path(),
            tiles_provider: self.state.tiles_provider,
        };

        if let Ok(json) = serde_json::to_string(&settings) {
            storage.set_string(PersistedSettings::KEY, json);
            tracing::debug!("Saved settings on exit");
        }
    }
}
