// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.
//!
//! Every screen has a stable route derived from catalog slugs, so demo
//! screens keep the addresses the catalog promises
//! (`/buttons/shine-button`, `/components/buttons`).

use crate::catalog::{self, Category};

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// All-components grid with search.
    Home,
    /// One category's grid.
    Category(Category),
    /// One component's demo. The slug always comes from the registry.
    Demo(&'static str),
    /// Version info and usage report export.
    About,
}

impl Screen {
    /// Stable route of this screen.
    #[must_use]
    pub fn route(&self) -> String {
        match self {
            Screen::Home => "/".to_string(),
            Screen::Category(category) => format!("/components/{}", category.slug()),
            Screen::Demo(slug) => catalog::find(slug)
                .map(|meta| meta.route())
                .unwrap_or_else(|| "/".to_string()),
            Screen::About => "/about".to_string(),
        }
    }

    /// Resolves a route back to a screen.
    ///
    /// Unknown routes resolve to `None`; the caller falls back to Home.
    #[must_use]
    pub fn from_route(route: &str) -> Option<Self> {
        let trimmed = route.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Screen::Home);
        }
        if trimmed == "/about" {
            return Some(Screen::About);
        }

        let mut parts = trimmed.trim_start_matches('/').split('/');
        let first = parts.next()?;
        let second = parts.next();
        if parts.next().is_some() {
            return None;
        }

        match (first, second) {
            ("components", Some(category)) => Category::from_slug(category).map(Screen::Category),
            (category, Some(slug)) => {
                let meta = catalog::find(slug)?;
                (meta.category.slug() == category).then_some(Screen::Demo(meta.slug))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_route_round_trips() {
        assert_eq!(Screen::Home.route(), "/");
        assert_eq!(Screen::from_route("/"), Some(Screen::Home));
    }

    #[test]
    fn category_routes_round_trip() {
        for category in Category::ALL {
            let screen = Screen::Category(category);
            assert_eq!(Screen::from_route(&screen.route()), Some(screen));
        }
    }

    #[test]
    fn demo_routes_round_trip_for_every_registry_entry() {
        for meta in catalog::all() {
            let screen = Screen::Demo(meta.slug);
            assert_eq!(screen.route(), meta.route());
            assert_eq!(Screen::from_route(&screen.route()), Some(screen));
        }
    }

    #[test]
    fn about_route_round_trips() {
        assert_eq!(Screen::from_route("/about"), Some(Screen::About));
    }

    #[test]
    fn unknown_routes_resolve_to_none() {
        assert_eq!(Screen::from_route("/components/widgets"), None);
        assert_eq!(Screen::from_route("/buttons/no-such-slug"), None);
        assert_eq!(Screen::from_route("/a/b/c"), None);
    }

    #[test]
    fn demo_route_requires_matching_category() {
        // shine-button lives under /buttons, not /cards
        assert_eq!(Screen::from_route("/cards/shine-button"), None);
    }
}
