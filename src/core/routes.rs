// Route Table
// Path-style page mapping for the portfolio

/// The pages of the portfolio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    About,
    Build,
    Perform,
    Research,
    Gallery,
    NotFound,
}

impl Route {
    /// The five navigable pages in display order
    pub const NAV: [Route; 5] = [
        Route::About,
        Route::Build,
        Route::Perform,
        Route::Research,
        Route::Gallery,
    ];

    /// Path for this page
    pub fn path(&self) -> &'static str {
        match self {
            Route::About => "/about",
            Route::Build => "/build",
            Route::Perform => "/perform",
            Route::Research => "/research",
            Route::Gallery => "/gallery",
            Route::NotFound => "/404",
        }
    }

    /// Display title for this page
    pub fn title(&self) -> &'static str {
        match self {
            Route::About => "About",
            Route::Build => "Build",
            Route::Perform => "Perform",
            Route::Research => "Research",
            Route::Gallery => "Gallery",
            Route::NotFound => "404",
        }
    }

    /// Header subtitle for this page
    pub fn subtitle(&self) -> &'static str {
        match self {
            Route::About => "CS & SDS @ Smith · Builder × Artist · Tutor & Organizer",
            Route::Build => "Web · Data/ML · Systems · outcome-first projects",
            Route::Perform => "Theatre & Film · watch first, then read",
            Route::Research => "Evidence of inquiry + artifacts",
            Route::Gallery => "Visual taste + growth",
            Route::NotFound => "Page not found.",
        }
    }

    /// Map a path to its page. The bare root redirects to About and
    /// unknown paths fall through to NotFound.
    pub fn from_path(path: &str) -> Route {
        match path {
            "/" | "/about" => Route::About,
            "/build" => Route::Build,
            "/perform" => Route::Perform,
            "/research" => Route::Research,
            "/gallery" => Route::Gallery,
            _ => Route::NotFound,
        }
    }

    /// Map a bare page name (as written in config.yaml) to its page
    pub fn from_page_name(name: &str) -> Option<Route> {
        match name.to_lowercase().as_str() {
            "about" => Some(Route::About),
            "build" => Some(Route::Build),
            "perform" => Some(Route::Perform),
            "research" => Some(Route::Research),
            "gallery" => Some(Route::Gallery),
            _ => None,
        }
    }

    /// Position of this page in the nav, if it is navigable
    pub fn nav_index(&self) -> Option<usize> {
        Route::NAV.iter().position(|route| route == self)
    }

    /// The next page in nav order (wraps around)
    pub fn next(&self) -> Route {
        match self.nav_index() {
            Some(index) => Route::NAV[(index + 1) % Route::NAV.len()],
            None => Route::NAV[0],
        }
    }

    /// The previous page in nav order (wraps around)
    pub fn prev(&self) -> Route {
        match self.nav_index() {
            Some(index) => Route::NAV[(index + Route::NAV.len() - 1) % Route::NAV.len()],
            None => Route::NAV[0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_nav_path_round_trips() {
        for route in Route::NAV {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_root_redirects_to_about() {
        assert_eq!(Route::from_path("/"), Route::About);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(Route::from_path("/blog"), Route::NotFound);
        assert_eq!(Route::from_path(""), Route::NotFound);
    }

    #[test]
    fn test_page_names_map_for_config() {
        assert_eq!(Route::from_page_name("about"), Some(Route::About));
        assert_eq!(Route::from_page_name("Gallery"), Some(Route::Gallery));
        assert_eq!(Route::from_page_name("blog"), None);
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Route::Gallery.next(), Route::About);
        assert_eq!(Route::About.prev(), Route::Gallery);
        assert_eq!(Route::NotFound.next(), Route::About);
    }
}
