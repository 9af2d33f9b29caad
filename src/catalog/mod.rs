// SPDX-License-Identifier: MPL-2.0
//! Static component catalog: categories, component metadata, and lookups.
//!
//! The catalog is pure data defined at compile time. Screens and the
//! sidebar never mutate it; they only iterate and filter it.

mod registry;
pub mod snippets;

pub use registry::{all, by_category, find, search, COMPONENTS};

/// Category a component is filed under.
///
/// Categories drive the sidebar navigation and the category index grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Buttons,
    Text,
    Cards,
    Loaders,
    Effects,
    Animations,
}

impl Category {
    /// All categories in sidebar display order.
    pub const ALL: [Category; 6] = [
        Category::Buttons,
        Category::Text,
        Category::Cards,
        Category::Loaders,
        Category::Effects,
        Category::Animations,
    ];

    /// URL-safe identifier used in routes (`/components/<slug>`).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::Buttons => "buttons",
            Category::Text => "text",
            Category::Cards => "cards",
            Category::Loaders => "loaders",
            Category::Effects => "effects",
            Category::Animations => "animations",
        }
    }

    /// Parses a category slug. Unknown slugs resolve to `None`, which
    /// callers treat as an empty category rather than an error.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// The i18n key for the category's display label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Category::Buttons => "category-buttons",
            Category::Text => "category-text",
            Category::Cards => "category-cards",
            Category::Loaders => "category-loaders",
            Category::Effects => "category-effects",
            Category::Animations => "category-animations",
        }
    }
}

/// Metadata describing one catalog entry.
///
/// Immutable and defined at compile time; `slug` doubles as the stable
/// routing address of the component's demo screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentMeta {
    /// Unique, URL-safe identifier (`shine-button`).
    pub slug: &'static str,
    /// Human-readable display name (`Shine Button`).
    pub name: &'static str,
    /// Category the component is filed under.
    pub category: Category,
    /// Shows the "new" badge in grids.
    pub is_new: bool,
    /// Shows the "premium" badge in grids. Purely visual; nothing is gated.
    pub is_premium: bool,
}

impl ComponentMeta {
    /// Stable route of the component's demo screen, derived from its slug
    /// (`/buttons/shine-button`).
    #[must_use]
    pub fn route(&self) -> String {
        format!("/{}/{}", self.category.slug(), self.slug)
    }
}
