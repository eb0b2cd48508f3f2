//! Walkers plugin marking the home location on the map

use egui::{Color32, Stroke};
use walkers::{Plugin, Projector};

/// Draws a marker and a label at the location the home view opened at
pub struct HomeMarkerPlugin {
    lat: f64,
    lon: f64,
    label: String,
}

impl HomeMarkerPlugin {
    pub fn new(lat: f64, lon: f64, label: impl Into<String>) -> Self {
        Self {
            lat,
            lon,
            label: label.into(),
        }
    }
}

impl Plugin for HomeMarkerPlugin {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        _response: &egui::Response,
        projector: &Projector,
        _map_memory: &walkers::MapMemory,
    ) {
        profiling::scope!("HomeMarkerPlugin::run");

        let screen_vec = projector.project(walkers::lat_lon(self.lat, self.lon));
        let screen_pos = egui::Pos2::new(screen_vec.x, screen_vec.y);

        let painter = ui.painter();
        painter.circle(
            screen_pos,
            6.0,
            Color32::from_rgb(70, 130, 220),
            Stroke::new(2.0, Color32::WHITE),
        );
        painter.text(
            screen_pos + egui::vec2(10.0, -10.0),
            egui::Align2::LEFT_BOTTOM,
            &self.label,
            egui::FontId::proportional(13.0),
            Color32::from_black_alpha(220),
        );
    }
}
