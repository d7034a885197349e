/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog loader and the UI layer.

use serde::{Deserialize, Serialize};

/// A single project shown in the portfolio grid
///
/// Entries are immutable once loaded. The title is the identity key
/// of an entry within a catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEntry {
    pub title: String,
    pub year: String,
    pub description: String,
    /// Ordered tags, rendered as pills
    #[serde(default)]
    pub tags: Vec<String>,
    /// Path to the cover image (relative paths resolve against the catalog file)
    pub image: String,
    /// Link to the live project or repository
    #[serde(default)]
    pub url: Option<String>,
    /// Why there is no link (e.g. "private repository")
    #[serde(default)]
    pub url_missing_reason: Option<String>,
}

impl PortfolioEntry {
    /// Text matched by the portfolio search.
    ///
    /// Fields are concatenated without separators; tags are joined
    /// with a single space.
    pub fn search_text(&self) -> String {
        let mut composite = String::with_capacity(
            self.title.len() + self.year.len() + self.description.len() + 16 * self.tags.len(),
        );
        composite.push_str(&self.title);
        composite.push_str(&self.tags.join(" "));
        composite.push_str(&self.year);
        composite.push_str(&self.description);
        composite
    }

    /// Where a click on this entry's card leads. An empty URL counts as absent.
    pub fn link(&self) -> CardLink<'_> {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() => CardLink::External(url),
            _ => CardLink::Unavailable(self.url_missing_reason.as_deref()),
        }
    }
}

/// Link state of a portfolio card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLink<'a> {
    /// Opens the URL outside the app
    External(&'a str),
    /// Card is inert; an optional reason is displayed
    Unavailable(Option<&'a str>),
}

/// Profile of the site owner, shown in the header and on the pages
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    /// Avatar image path
    pub photo: String,
    pub tagline: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub label: String,
    pub url: String,
}

/// Blog post listed on the blog page
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub summary: String,
}
