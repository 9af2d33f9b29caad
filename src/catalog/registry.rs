// SPDX-License-Identifier: MPL-2.0
//! The static component registry.
//!
//! Entries are listed in authoring order; grids preserve that order.
//! Lookups are pure functions over this table and never allocate unless
//! they have to return an owned collection.

use super::{Category, ComponentMeta};

/// Every component shown in the gallery, in display order.
pub const COMPONENTS: [ComponentMeta; 11] = [
    ComponentMeta {
        slug: "shine-button",
        name: "Shine Button",
        category: Category::Buttons,
        is_new: false,
        is_premium: false,
    },
    ComponentMeta {
        slug: "ripple-button",
        name: "Ripple Button",
        category: Category::Buttons,
        is_new: true,
        is_premium: false,
    },
    ComponentMeta {
        slug: "decrypt-text",
        name: "Decrypt Text",
        category: Category::Text,
        is_new: true,
        is_premium: false,
    },
    ComponentMeta {
        slug: "glitch-text",
        name: "Glitch Text",
        category: Category::Text,
        is_new: false,
        is_premium: false,
    },
    ComponentMeta {
        slug: "gradient-text",
        name: "Gradient Text",
        category: Category::Text,
        is_new: false,
        is_premium: false,
    },
    ComponentMeta {
        slug: "spotlight-card",
        name: "Spotlight Card",
        category: Category::Cards,
        is_new: false,
        is_premium: true,
    },
    ComponentMeta {
        slug: "bounce-cards",
        name: "Bounce Cards",
        category: Category::Cards,
        is_new: false,
        is_premium: false,
    },
    ComponentMeta {
        slug: "orbit-loader",
        name: "Orbit Loader",
        category: Category::Loaders,
        is_new: false,
        is_premium: false,
    },
    ComponentMeta {
        slug: "wave-loader",
        name: "Wave Loader",
        category: Category::Loaders,
        is_new: true,
        is_premium: false,
    },
    ComponentMeta {
        slug: "glow-border",
        name: "Glow Border",
        category: Category::Effects,
        is_new: false,
        is_premium: true,
    },
    ComponentMeta {
        slug: "pulse-ring",
        name: "Pulse Ring",
        category: Category::Animations,
        is_new: false,
        is_premium: false,
    },
];

/// All components in authoring order.
#[must_use]
pub fn all() -> &'static [ComponentMeta] {
    &COMPONENTS
}

/// Components filed under `category`, preserving authoring order.
///
/// A category with no entries yields an empty iterator, never an error.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static ComponentMeta> {
    by_category_in(&COMPONENTS, category)
}

/// Category filter over an arbitrary component table.
///
/// Exposed separately so tests can exercise the filter against seeded
/// fixtures without touching the real registry.
pub fn by_category_in(
    components: &[ComponentMeta],
    category: Category,
) -> impl Iterator<Item = &ComponentMeta> {
    components.iter().filter(move |m| m.category == category)
}

/// Looks up a component by its exact slug.
#[must_use]
pub fn find(slug: &str) -> Option<&'static ComponentMeta> {
    COMPONENTS.iter().find(|m| m.slug == slug)
}

/// Case-insensitive substring search over name and slug.
///
/// An empty query is the identity filter: every component matches.
#[must_use]
pub fn search(query: &str) -> Vec<&'static ComponentMeta> {
    let needle = query.trim().to_lowercase();
    COMPONENTS
        .iter()
        .filter(|m| {
            needle.is_empty()
                || m.name.to_lowercase().contains(&needle)
                || m.slug.contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_pairwise_distinct() {
        let mut seen = HashSet::new();
        for meta in all() {
            assert!(
                seen.insert(meta.slug),
                "duplicate slug in registry: {}",
                meta.slug
            );
        }
    }

    #[test]
    fn by_category_returns_only_matching_components() {
        for category in Category::ALL {
            for meta in by_category(category) {
                assert_eq!(meta.category, category);
            }
        }
    }

    #[test]
    fn every_category_with_entries_is_non_empty() {
        let populated: HashSet<_> = all().iter().map(|m| m.category).collect();
        for category in Category::ALL {
            let count = by_category(category).count();
            assert_eq!(count > 0, populated.contains(&category));
        }
    }

    #[test]
    fn by_category_preserves_authoring_order() {
        let text: Vec<_> = by_category(Category::Text).map(|m| m.slug).collect();
        assert_eq!(text, vec!["decrypt-text", "glitch-text", "gradient-text"]);
    }

    #[test]
    fn seeded_table_filters_exactly() {
        let table = [
            ComponentMeta {
                slug: "shine-button",
                name: "Shine Button",
                category: Category::Buttons,
                is_new: false,
                is_premium: false,
            },
            ComponentMeta {
                slug: "bounce-cards",
                name: "Bounce Cards",
                category: Category::Cards,
                is_new: false,
                is_premium: false,
            },
        ];

        let buttons: Vec<_> = by_category_in(&table, Category::Buttons).collect();
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].slug, "shine-button");

        let loaders: Vec<_> = by_category_in(&table, Category::Loaders).collect();
        assert!(loaders.is_empty());
    }

    #[test]
    fn find_matches_exact_slug_only() {
        assert!(find("shine-button").is_some());
        assert!(find("shine").is_none());
        assert!(find("SHINE-BUTTON").is_none());
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_slug() {
        let by_name: Vec<_> = search("Shine").iter().map(|m| m.slug).collect();
        assert_eq!(by_name, vec!["shine-button"]);

        let by_slug: Vec<_> = search("RIPPLE").iter().map(|m| m.slug).collect();
        assert_eq!(by_slug, vec!["ripple-button"]);
    }

    #[test]
    fn empty_search_returns_everything() {
        assert_eq!(search("").len(), all().len());
        assert_eq!(search("   ").len(), all().len());
    }

    #[test]
    fn search_with_no_match_returns_empty() {
        assert!(search("zzz-no-such-component").is_empty());
    }
}
