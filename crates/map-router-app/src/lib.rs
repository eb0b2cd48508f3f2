//! Map Router - Application Library
//!
//! Glues the `view-router` resolver to an eframe window: every route in the
//! table names a view, and the resolver decides which one is mounted.

mod app;

pub use app::MapRouterApp;

eframe_entrypoints::eframe_app!("Map Router", |cc| Box::new(MapRouterApp::new(cc)));
