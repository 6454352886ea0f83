pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const MAIN_NAV: [NavItem; 5] = [
    NavItem {
        label: "Home",
        href: "/",
    },
    NavItem {
        label: "Portfolio",
        href: "/portfolio",
    },
    NavItem {
        label: "Blog",
        href: "/blog",
    },
    NavItem {
        label: "Résumé",
        href: "/resume",
    },
    NavItem {
        label: "Contact",
        href: "/contact",
    },
];

pub const EXTRA_NAV: [NavItem; 2] = [
    NavItem {
        label: "GitHub projects",
        href: "https://github.com/ivan-petrov?tab=repositories",
    },
    NavItem {
        label: "NuGet packages",
        href: "https://www.nuget.org/profiles/ivan-petrov",
    },
];

/// Vertical scroll, in pixels, past which the navbar turns opaque.
pub const SCROLL_THRESHOLD: f64 = 10.0;

pub fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    match pathname.strip_prefix(href) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Target of the navbar search box.
pub fn search_href(term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        "/blog".to_string()
    } else {
        format!("/blog?q={}", urlencoding::encode(term))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
    pub dropdown_open: bool,
    pub search_open: bool,
}

impl NavState {
    pub fn scrolled_to(&mut self, y: f64) {
        self.scrolled = y > SCROLL_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    pub fn toggle_search(&mut self) {
        self.search_open = !self.search_open;
    }

    /// Route changed: collapse everything that was open.
    pub fn navigated(&mut self) {
        self.menu_open = false;
        self.dropdown_open = false;
        self.search_open = false;
    }
}
