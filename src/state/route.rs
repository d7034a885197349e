/// Current location and the header's navigation destinations

/// Destinations listed in the header, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDestination {
    Home,
    Portfolio,
    Blog,
    Contacts,
}

impl NavDestination {
    pub const ALL: [NavDestination; 4] = [
        NavDestination::Home,
        NavDestination::Portfolio,
        NavDestination::Blog,
        NavDestination::Contacts,
    ];

    pub fn path(self) -> &'static str {
        match self {
            NavDestination::Home => "/",
            NavDestination::Portfolio => "/portfolio",
            NavDestination::Blog => "/blog",
            NavDestination::Contacts => "/contacts",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavDestination::Home => "Home",
            NavDestination::Portfolio => "Portfolio",
            NavDestination::Blog => "Blogs",
            NavDestination::Contacts => "Contacts",
        }
    }

    /// Home matches only the root; the others match by prefix
    pub fn is_active(self, route: &Route) -> bool {
        match self {
            NavDestination::Home => route.path() == "/",
            _ => route.path().starts_with(self.path()),
        }
    }

    pub fn variant(self, route: &Route) -> LinkVariant {
        if self.is_active(route) {
            LinkVariant::Filled
        } else {
            LinkVariant::Subtle
        }
    }
}

/// Rendering style of a navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkVariant {
    Filled,
    Subtle,
}

/// Page resolved from a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Portfolio,
    BlogIndex,
    BlogPost(String),
    Contacts,
    NotFound,
}

/// The path currently displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
}

impl Route {
    /// Paths are kept as given, except that a missing leading slash is added
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };
        Self { path }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn page(&self) -> Page {
        let mut segments = self.path.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => Page::Home,
            (Some("portfolio"), None, _) => Page::Portfolio,
            (Some("blog"), None, _) => Page::BlogIndex,
            (Some("blog"), Some(slug), None) => Page::BlogPost(slug.to_string()),
            (Some("contacts"), None, _) => Page::Contacts,
            _ => Page::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants(path: &str) -> Vec<(&'static str, LinkVariant)> {
        let route = Route::new(path);
        NavDestination::ALL
            .iter()
            .map(|d| (d.label(), d.variant(&route)))
            .collect()
    }

    #[test]
    fn test_blog_post_highlights_blogs_only() {
        assert_eq!(
            variants("/blog/post-1"),
            vec![
                ("Home", LinkVariant::Subtle),
                ("Portfolio", LinkVariant::Subtle),
                ("Blogs", LinkVariant::Filled),
                ("Contacts", LinkVariant::Subtle),
            ]
        );
    }

    #[test]
    fn test_home_requires_exact_match() {
        let route = Route::new("/");
        assert!(NavDestination::Home.is_active(&route));
        assert!(!NavDestination::Home.is_active(&Route::new("/portfolio")));
    }

    #[test]
    fn test_prefix_match() {
        assert!(NavDestination::Portfolio.is_active(&Route::new("/portfolio/alpha")));
        assert!(NavDestination::Contacts.is_active(&Route::new("/contacts")));
    }

    #[test]
    fn test_at_most_one_filled() {
        for path in ["/", "/portfolio", "/blog", "/blog/x", "/contacts", "/elsewhere"] {
            let filled = variants(path)
                .iter()
                .filter(|(_, v)| *v == LinkVariant::Filled)
                .count();
            assert!(filled <= 1, "{path}");
        }
    }

    #[test]
    fn test_pages() {
        assert_eq!(Route::new("/").page(), Page::Home);
        assert_eq!(Route::new("portfolio").page(), Page::Portfolio);
        assert_eq!(Route::new("/blog").page(), Page::BlogIndex);
        assert_eq!(Route::new("/blog/post-1").page(), Page::BlogPost("post-1".into()));
        assert_eq!(Route::new("/contacts").page(), Page::Contacts);
        assert_eq!(Route::new("/nope").page(), Page::NotFound);
    }
}
