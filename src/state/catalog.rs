use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use super::data::{BlogPost, PortfolioEntry, Profile};

/// Catalog compiled into the binary, used when no catalog file exists
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate portfolio title: {0:?}")]
    DuplicateTitle(String),
}

#[derive(Deserialize)]
struct CatalogFile {
    profile: Profile,
    #[serde(default)]
    portfolio: Vec<PortfolioEntry>,
    #[serde(default)]
    posts: Vec<BlogPost>,
}

/// Everything the site displays.
///
/// The portfolio is shared read-only between the app and every render.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub profile: Profile,
    pub portfolio: Arc<[PortfolioEntry]>,
    pub posts: Arc<[BlogPost]>,
    /// Directory relative image paths resolve against
    base_dir: Option<PathBuf>,
}

impl Catalog {
    /// Parse a catalog from its JSON text.
    ///
    /// Titles identify entries, so a repeated title is rejected.
    pub fn from_json(json: &str, base_dir: Option<PathBuf>) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for entry in &file.portfolio {
            if !seen.insert(entry.title.as_str()) {
                return Err(CatalogError::DuplicateTitle(entry.title.clone()));
            }
        }

        Ok(Catalog {
            profile: file.profile,
            portfolio: file.portfolio.into(),
            posts: file.posts.into(),
            base_dir,
        })
    }

    /// The catalog shipped with the binary
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG, None)
    }

    /// A catalog with nothing in it
    pub fn empty() -> Self {
        Catalog {
            profile: Profile {
                name: String::new(),
                photo: String::new(),
                tagline: String::new(),
                contacts: Vec::new(),
            },
            portfolio: Arc::from(Vec::new()),
            posts: Arc::from(Vec::new()),
            base_dir: None,
        }
    }

    /// Resolve an image reference from the catalog to a file path
    pub fn image_path(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|post| post.slug == slug)
    }
}

/// Read and parse a catalog file off the UI thread
pub async fn load_catalog(path: PathBuf) -> Result<Catalog, CatalogError> {
    let json = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;

    let catalog = Catalog::from_json(&json, path.parent().map(Path::to_path_buf))?;
    tracing::info!(
        path = %path.display(),
        entries = catalog.portfolio.len(),
        posts = catalog.posts.len(),
        "catalog loaded"
    );
    Ok(catalog)
}
