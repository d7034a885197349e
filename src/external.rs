/// Opening links outside the app
use std::process::Command;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenUrlError {
    #[error("refusing to open non-web link {0:?}")]
    UnsupportedScheme(String),
    #[error("failed to launch the system opener: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Schemes handed to the system opener
const ALLOWED_SCHEMES: [&str; 3] = ["https://", "http://", "mailto:"];

/// Open `url` in the default browser (a new context, like a new tab).
///
/// The opener process is spawned and not waited on.
pub fn open_url(url: &str) -> Result<(), OpenUrlError> {
    check_scheme(url)?;

    #[cfg(target_os = "macos")]
    let spawned = Command::new("open").arg(url).spawn();
    #[cfg(target_os = "windows")]
    let spawned = Command::new("cmd").args(["/c", "start", "", url]).spawn();
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let spawned = Command::new("xdg-open").arg(url).spawn();

    spawned?;
    tracing::info!(%url, "opened external link");
    Ok(())
}

fn check_scheme(url: &str) -> Result<(), OpenUrlError> {
    let lower = url.to_ascii_lowercase();
    if ALLOWED_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        Ok(())
    } else {
        Err(OpenUrlError::UnsupportedScheme(url.to_string()))
    }
}
