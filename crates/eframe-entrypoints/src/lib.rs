//! Entry point bootstrap for eframe applications
//!
//! This crate owns everything that happens before the first frame: logging
//! and profiling setup, CLI parsing helpers, version logging, and creating the
//! native window.
//!
//! # Usage
//!
//! In your application's `lib.rs`, use the `eframe_app!` macro to define the
//! entry point:
//!
//! ```ignore
//! eframe_entrypoints::eframe_app!("My App Name", |cc| Box::new(MyApp::new(cc)));
//! ```
//!
//! In your `main.rs`:
//!
//! ```ignore
//! fn main() {
//!     my_app::run_native();
//! }
//! ```

pub mod cli;
pub mod profiling;

// Re-export commonly used types
pub use cli::{parse_args, parse_args_from};
pub use profiling::profiling_ui;

mod metadata;
pub use metadata::{log_version_info, short_version_info};

// Re-exported for the code generated by `eframe_app!`
pub use eframe;
pub use eframe::CreationContext;
pub use tokio;

/// Define the native entry point of an eframe application.
///
/// # Arguments
///
/// * `$app_name` - A string literal with the application name (window title, logging)
/// * `$app_creator` - A closure that takes `&CreationContext` and returns `Box<dyn eframe::App>`
///
/// # Generated Code
///
/// ```ignore
/// pub fn run_native() { ... }  // Call this from main.rs
/// ```
#[macro_export]
macro_rules! eframe_app {
    ($app_name:expr, $app_creator:expr) => {
        /// Run the application on native (desktop) platforms.
        #[cfg(not(target_arch = "wasm32"))]
        pub fn run_native() {
            let rt = $crate::tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("Failed to create Tokio runtime");

            rt.block_on(async {
                $crate::native_main_impl($app_name, env!("CARGO_PKG_VERSION"), $app_creator)
                    .await;
            });
        }
    };
}

/// Internal implementation for the native entry point.
/// Use the `eframe_app!` macro instead of calling this directly.
#[cfg(not(target_arch = "wasm32"))]
#[doc(hidden)]
pub async fn native_main_impl(
    app_name: &str,
    app_version: &str,
    app_creator: impl FnOnce(&eframe::CreationContext<'_>) -> Box<dyn eframe::App>,
) {
    // Must run before any logging so every layer sees the first events
    profiling::setup_logging_and_profiling();

    log_version_info(app_name, app_version);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(app_name),
        ..Default::default()
    };

    if let Err(err) = eframe::run_native(
        app_name,
        native_options,
        Box::new(move |cc| Ok(app_creator(cc))),
    ) {
        tracing::error!("{app_name} exited with an error: {err}");
    }

    profiling::stop_profiling();
}
