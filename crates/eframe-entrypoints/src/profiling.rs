/*!
Logging and profiling setup.

Two implementations share one API:

- real: compiled with `feature = "profiling"`. `profiling::scope!` spans are
  forwarded to `tracing`, and when the `TRACE_FILE` environment variable is
  set a `tracing-chrome` layer records them into that file (open it with
  Perfetto or `chrome://tracing`).
- stub: logging only.

Top-level API (always available):
- `setup_logging_and_profiling()`
- `stop_profiling()`
- `is_profiling_enabled() -> bool`
- `profiling_ui(&mut egui::Ui)`
*/

use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or invalid
const DEFAULT_FILTER: &str = if cfg!(debug_assertions) {
    "debug,eframe=warn,egui=warn,walkers=info,hyper_util=info,reqwest=info"
} else {
    "info,eframe=warn,egui=warn"
};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(feature = "profiling")]
mod inner {
    use std::path::PathBuf;
    use std::sync::Mutex;

    use tracing_chrome::{ChromeLayerBuilder, FlushGuard};
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    struct ProfilingState {
        /// Flushes the trace file when dropped
        guard: FlushGuard,
        trace_file: PathBuf,
    }

    static PROFILING_STATE: Mutex<Option<ProfilingState>> = Mutex::new(None);

    fn with_state<R>(f: impl FnOnce(&mut Option<ProfilingState>) -> R) -> R {
        match PROFILING_STATE.lock() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => {
                tracing::warn!("Profiling state mutex poisoned; recovering");
                f(&mut poisoned.into_inner())
            }
        }
    }

    pub fn setup_logging_and_profiling() {
        let trace_file = std::env::var_os("TRACE_FILE").map(PathBuf::from);

        let chrome_layer = trace_file.as_ref().map(|path| {
            let (layer, guard) = ChromeLayerBuilder::new()
                .file(path)
                .include_args(true)
                .build();
            with_state(|state| {
                *state = Some(ProfilingState {
                    guard,
                    trace_file: path.clone(),
                })
            });
            layer
        });

        let fmt_layer = fmt::layer().with_filter(super::env_filter());
        tracing_subscriber::registry()
            .with(chrome_layer)
            .with(fmt_layer)
            .init();

        match trace_file {
            Some(path) => tracing::info!("Recording profiling spans to {}", path.display()),
            None => tracing::info!("Logging initialized (set TRACE_FILE to record a profile)"),
        }
    }

    pub fn stop_profiling() {
        if let Some(state) = with_state(Option::take) {
            drop(state.guard);
            tracing::info!("Profile written to {}", state.trace_file.display());
        }
    }

    pub fn is_profiling_enabled() -> bool {
        with_state(|state| state.is_some())
    }

    pub fn profiling_ui(ui: &mut egui::Ui) {
        egui::warn_if_debug_build(ui);
        let trace_file = with_state(|state| state.as_ref().map(|s| s.trace_file.clone()));
        match trace_file {
            Some(path) => {
                ui.label(format!("⏺ Recording to {}", path.display()));
                if ui.button("Stop and flush").clicked() {
                    stop_profiling();
                }
            }
            None => {
                ui.label("Not recording. Restart with TRACE_FILE=<path> to profile.");
            }
        }
    }
}

#[cfg(not(feature = "profiling"))]
mod inner {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    pub fn setup_logging_and_profiling() {
        let fmt_layer = fmt::layer().with_filter(super::env_filter());
        tracing_subscriber::registry().with(fmt_layer).init();

        tracing::info!("Logging initialized (profiling disabled in this build)");
    }

    pub fn stop_profiling() {}

    pub fn is_profiling_enabled() -> bool {
        false
    }

    pub fn profiling_ui(ui: &mut egui::Ui) {
        ui.label("Profiling feature not enabled in this build.");
    }
}

// Re-export a stable API surface regardless of which `inner` module was compiled.
pub use inner::{is_profiling_enabled, profiling_ui, setup_logging_and_profiling, stop_profiling};
