/// Start-up configuration, resolved from the environment
use std::path::PathBuf;

use crate::state::route::Route;

/// Explicit catalog file
pub const CATALOG_ENV: &str = "PORTFOLIO_SITE_CATALOG";
/// Route shown at start-up
pub const ROUTE_ENV: &str = "PORTFOLIO_SITE_ROUTE";

const DEFAULT_ROUTE: &str = "/portfolio";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Catalog file to load; `None` means only the bundled catalog is used
    pub catalog_path: Option<PathBuf>,
    pub initial_route: Route,
}

impl Config {
    pub fn from_env() -> Self {
        Self::resolve(
            std::env::var_os(CATALOG_ENV).map(PathBuf::from),
            std::env::var(ROUTE_ENV).ok(),
            dirs::data_dir(),
        )
    }

    /// The catalog path comes from the environment, else from the
    /// user's data directory:
    /// - Linux: ~/.local/share/portfolio-site/catalog.json
    /// - macOS: ~/Library/Application Support/portfolio-site/catalog.json
    /// - Windows: %APPDATA%\portfolio-site\catalog.json
    fn resolve(
        catalog_override: Option<PathBuf>,
        route: Option<String>,
        data_dir: Option<PathBuf>,
    ) -> Self {
        let catalog_path = catalog_override.or_else(|| {
            data_dir.map(|mut path| {
                path.push("portfolio-site");
                path.push("catalog.json");
                path
            })
        });

        let initial_route = route
            .filter(|r| !r.is_empty())
            .map(Route::new)
            .unwrap_or_else(|| Route::new(DEFAULT_ROUTE));

        Config {
            catalog_path,
            initial_route,
        }
    }
}
