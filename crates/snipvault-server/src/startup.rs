//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
   _____       _                       _ _
  / ____|     (_)                     | | |
 | (___  _ __  _ _ ____   ____ _ _   _| | |_
  \___ \| '_ \| | '_ \ \ / / _` | | | | | __|
  ____) | | | | | |_) \ V / (_| | |_| | | |_
 |_____/|_| |_|_| .__/ \_/ \__,_|\__,_|_|\__|
                | |
                |_|
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(addr: &str, cache_backend: &str, metrics_path: Option<&str>) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}/api/v1/snippets", addr);
    info!("Health:    http://{}/health", addr);
    if let Some(path) = metrics_path {
        info!("Metrics:   http://{}{}", addr, path);
    }
    info!("Cache:     {}", cache_backend);
    info!("{}", separator);
}
