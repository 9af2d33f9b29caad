// SPDX-License-Identifier: MPL-2.0
use glint::app::persisted_state::AppState;
use glint::catalog::{self, snippets, Category};
use glint::config::{self, Config};
use glint::i18n::fluent::I18n;
use glint::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn theme_mode_survives_a_config_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        theme_mode: ThemeMode::Dark,
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to save config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.theme_mode, ThemeMode::Dark);
}

#[test]
fn every_component_is_fully_wired() {
    // Each registry entry needs a snippet, a localized category label, and
    // a stable route. A gap in any of these is an authoring error that
    // should fail loudly here rather than degrade at runtime.
    let i18n = I18n::default();

    for meta in catalog::all() {
        let snippet = snippets::source_for(meta.slug)
            .unwrap_or_else(|| panic!("missing snippet for {}", meta.slug));
        assert!(!snippet.trim().is_empty());

        let label = i18n.tr(meta.category.i18n_key());
        assert!(
            !label.starts_with("MISSING:"),
            "missing category label for {}",
            meta.category.slug()
        );

        assert!(meta.route().starts_with('/'));
        assert!(meta.route().ends_with(meta.slug));
    }
}

#[test]
fn category_grids_cover_the_whole_registry() {
    let total: usize = Category::ALL
        .iter()
        .map(|&category| catalog::by_category(category).count())
        .sum();
    assert_eq!(total, catalog::all().len());
}

#[test]
fn favorites_persist_across_sessions() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = dir.path().to_path_buf();

    // First session favorites two components
    let mut state = AppState::default();
    state.toggle_favorite("shine-button");
    state.toggle_favorite("wave-loader");
    assert_eq!(state.save_to(Some(base.clone())), None);

    // A fresh session sees both, then removes one
    let (mut next_session, warning) = AppState::load_from(Some(base.clone()));
    assert_eq!(warning, None);
    assert!(next_session.is_favorite("shine-button"));
    assert!(next_session.is_favorite("wave-loader"));

    next_session.toggle_favorite("shine-button");
    assert_eq!(next_session.save_to(Some(base.clone())), None);

    let (final_session, _) = AppState::load_from(Some(base));
    assert!(!final_session.is_favorite("shine-button"));
    assert!(final_session.is_favorite("wave-loader"));
}

#[test]
fn search_results_stay_inside_the_registry() {
    for query in ["button", "TEXT", "zz-nothing", ""] {
        for meta in catalog::search(query) {
            assert!(catalog::find(meta.slug).is_some());
        }
    }
}
