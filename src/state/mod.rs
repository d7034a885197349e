/// State management module
///
/// This module handles all application state, including:
/// - The portfolio catalog and its loading (catalog.rs)
/// - Shared data structures (data.rs)
/// - Search query and filtered view (search.rs)
/// - Current route and navigation links (route.rs)
/// - Header visibility on scroll (headroom.rs)
/// - Light/dark mode (theme.rs)

pub mod catalog;
pub mod data;
pub mod headroom;
pub mod route;
pub mod search;
pub mod theme;
