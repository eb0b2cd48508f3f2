//! UI panels for the application
//!
//! The navigation bar, the views the resolver mounts, and the fallback panels
//! the host shows when nothing (or nothing valid) is mounted.

use crate::app::plugin::HomeMarkerPlugin;
use crate::app::state::{AppState, NavRequest, TilesProvider};
use crate::app::views::{HomeView, TestView, ViewKind, ViewMounter};
use egui::{Color32, RichText, Ui};
use view_router::{NavigationError, Resolver, RouteEntry};
use walkers::{HttpTiles, Map};

/// Back/forward buttons, address bar, and one button per route
pub fn nav_bar(ctx: &egui::Context, state: &mut AppState, resolver: &Resolver<ViewMounter>) {
    egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(resolver.can_go_back(), egui::Button::new("⏴"))
                .on_hover_text("Back (Alt+Left)")
                .clicked()
            {
                state.request(NavRequest::Back);
            }
            if ui
                .add_enabled(resolver.can_go_forward(), egui::Button::new("⏵"))
                .on_hover_text("Forward (Alt+Right)")
                .clicked()
            {
                state.request(NavRequest::Forward);
            }

            let response = ui.add(
                egui::TextEdit::singleline(&mut state.address)
                    .hint_text("/path")
                    .desired_width(220.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                let target = state.address.clone();
                state.request(NavRequest::Path(target));
            }

            ui.separator();

            let current = resolver.current_path();
            for route in resolver.routes() {
                let selected = current.as_deref() == Some(route.path());
                if ui
                    .selectable_label(selected, route.name())
                    .on_hover_text(route.path())
                    .clicked()
                {
                    state.request(NavRequest::Path(route.path().to_string()));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("❓").on_hover_text("Help (F1)").clicked() {
                    state.show_help = !state.show_help;
                }
                egui::ComboBox::from_id_salt("tiles_provider")
                    .selected_text(state.tiles_provider.name())
                    .show_ui(ui, |ui| {
                        for provider in TilesProvider::all() {
                            ui.selectable_value(&mut state.tiles_provider, *provider, provider.name());
                        }
                    });
                if let Some(err) = &state.last_error
                    && !matches!(err, NavigationError::RouteNotFound(_))
                {
                    ui.label(RichText::new(err.to_string()).color(ui.visuals().warn_fg_color));
                }
            });
        });
    });
}

/// Full-window map for the Home route
pub fn home_view(
    ui: &mut Ui,
    route: &RouteEntry<ViewKind>,
    home: &mut HomeView,
    tiles: &mut HttpTiles,
    provider: TilesProvider,
) {
    profiling::scope!("home_view");

    let marker = HomeMarkerPlugin::new(home.lat, home.lon, route.name());
    let map = Map::new(
        Some(tiles),
        &mut home.map_memory,
        walkers::lat_lon(home.lat, home.lon),
    )
    .with_plugin(marker);

    ui.add(map);

    let painter = ui.painter();
    let screen_rect = ui.max_rect();
    painter.text(
        screen_rect.center_bottom() + egui::vec2(0.0, -5.0),
        egui::Align2::CENTER_BOTTOM,
        provider.attribution(),
        egui::FontId::proportional(10.0),
        egui::Color32::from_black_alpha(180),
    );
}

/// Router diagnostics for the Test route
pub fn test_view(
    ui: &mut Ui,
    test: &TestView,
    resolver: &Resolver<ViewMounter>,
    state: &mut AppState,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(8.0);
            ui.heading("Route diagnostics");
            ui.add_space(8.0);

            render_routes_section(ui, resolver, state);

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            render_history_section(ui, resolver, state);

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            render_lifecycle_section(ui, test, resolver);

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            ui.label(RichText::new("🔧 Debug").strong());
            ui.add_space(6.0);
            ui.checkbox(&mut state.show_profiling, "Show profiling controls");
            if state.show_profiling {
                ui.add_space(4.0);
                eframe_entrypoints::profiling_ui(ui);
            }
        });
}

fn render_routes_section(ui: &mut Ui, resolver: &Resolver<ViewMounter>, state: &mut AppState) {
    ui.label(RichText::new("🗺 Routes").strong());
    ui.add_space(4.0);

    egui::Grid::new("routes_grid")
        .num_columns(3)
        .spacing([12.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label(RichText::new("Path").weak());
            ui.label(RichText::new("Name").weak());
            ui.label(RichText::new("View").weak());
            ui.end_row();

            for route in resolver.routes() {
                if ui.link(route.path()).clicked() {
                    state.request(NavRequest::Path(route.path().to_string()));
                }
                ui.label(route.name());
                ui.label(format!("{:?}", route.view()));
                ui.end_row();
            }
        });
}

fn render_history_section(ui: &mut Ui, resolver: &Resolver<ViewMounter>, state: &mut AppState) {
    ui.label(RichText::new("🕑 History").strong());
    ui.add_space(4.0);

    let history = resolver.history();
    let Some(cursor) = resolver.cursor() else {
        ui.label(RichText::new("Empty").weak());
        return;
    };

    egui::Grid::new("history_grid")
        .num_columns(3)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for (index, entry) in history.iter().enumerate() {
                let marker = if index == cursor { "▶" } else { "" };
                ui.label(marker);
                ui.label(RichText::new(format!("#{}", entry.sequence())).weak());
                if index == cursor {
                    ui.label(RichText::new(entry.path()).strong());
                } else if ui.link(entry.path()).clicked() {
                    state.request(NavRequest::Go(index as isize - cursor as isize));
                }
                ui.end_row();
            }
        });
}

fn render_lifecycle_section(ui: &mut Ui, test: &TestView, resolver: &Resolver<ViewMounter>) {
    ui.label(RichText::new("📊 Lifecycle").strong());
    ui.add_space(4.0);

    let (mounts, unmounts) = resolver
        .with_host(|host| (host.mounts(), host.unmounts()))
        .unwrap_or_default();

    egui::Grid::new("lifecycle_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("Mounted for:");
            ui.label(
                RichText::new(format!("{:.0} s", test.mounted_at.elapsed().as_secs_f64())).strong(),
            );
            ui.end_row();

            ui.label("This view:");
            ui.label(RichText::new(format!("mount #{}", test.mount_number)).strong());
            ui.end_row();

            ui.label("Views built:");
            ui.label(RichText::new(mounts.to_string()).strong());
            ui.end_row();

            ui.label("Views torn down:");
            ui.label(RichText::new(unmounts.to_string()).strong());
            ui.end_row();
        });
}

/// Shown instead of the active view when the requested path matched nothing
pub fn not_found(ui: &mut Ui, path: &str, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.heading(RichText::new("404").size(48.0).color(Color32::GRAY));
        ui.label(format!("No route matches {path:?}"));
        ui.add_space(12.0);
        if ui.button("🏠 Go home").clicked() {
            state.request(NavRequest::Path("/".to_string()));
        }
        if ui.button("Dismiss").clicked() {
            state.last_error = None;
        }
    });
}

/// Shown while no view is mounted
pub fn empty_view(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.label(RichText::new("Nothing mounted yet").weak());
        ui.label(RichText::new("Pick a route above").small().weak());
    });
}

/// Help overlay
pub fn help_overlay(ctx: &egui::Context, show_help: &mut bool) {
    egui::Window::new("Help")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.heading("Map Router");
            ui.add_space(8.0);

            ui.label("Each path in the address bar opens exactly one view.");
            ui.add_space(12.0);

            ui.label(RichText::new("Navigation").strong());
            ui.label("• Type a path and press Enter (matching is exact: \"/test/\" is not \"/test\")");
            ui.label("• Click a route name in the top bar");
            ui.label("• Click an earlier entry in the Test view history to jump to it");
            ui.add_space(8.0);

            ui.label(RichText::new("Keyboard Shortcuts").strong());
            ui.label("• Alt+Left / Alt+Right - Back / Forward");
            ui.label("• F1 - Toggle this help");
            ui.add_space(12.0);

            if ui.button("Close").clicked() {
                *show_help = false;
            }
        });
}
