/// Top-level navigation entries, in display order: `(href, label)`.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("/about", "About"),
    ("/articles", "Articles"),
    ("/projects", "Projects"),
    ("/speaking", "Speaking"),
    ("/uses", "Uses"),
];

/// The current page path, as supplied by the routing layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Whether this is the page that shows the large avatar.
    pub fn is_home(&self, home_path: &str) -> bool {
        self.path == home_path
    }

    /// Whether the navigation link `href` points at this page. Exact match
    /// only; `/articles/foo` does not activate `/articles`.
    pub fn is_active(&self, href: &str) -> bool {
        self.path == href
    }

    /// Navigation entries paired with their active state.
    pub fn nav(&self) -> impl Iterator<Item = (&'static str, &'static str, bool)> + '_ {
        NAV_LINKS
            .iter()
            .map(move |&(href, label)| (href, label, self.is_active(href)))
    }
}
