/// Log the application version and target at startup.
pub fn log_version_info(app_name: &str, app_version: &str) {
    tracing::info!("{}", short_version_info(app_name, app_version));
    tracing::info!(
        "Target: {}-{} ({})",
        std::env::consts::ARCH,
        std::env::consts::OS,
        if cfg!(debug_assertions) { "debug" } else { "release" }
    );
}

pub fn short_version_info(app_name: &str, app_version: &str) -> String {
    format!("{app_name} {app_version}")
}
