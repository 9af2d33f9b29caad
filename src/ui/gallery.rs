// SPDX-License-Identifier: MPL-2.0
//! Component grids for the Home and category index screens.
//!
//! Grids render catalog entries as cards in rows of three. Clicking a
//! card opens its demo screen; the heart in its corner toggles the
//! favorite flag without navigating.

use std::collections::BTreeSet;

use crate::catalog::ComponentMeta;
use crate::i18n::fluent::I18n;
use crate::ui::components::badge;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theme;
use iced::alignment::Vertical;
use iced::widget::space::horizontal as horizontal_space;
use iced::widget::{button, container, mouse_area, scrollable, Column, Row, Text};
use iced::{Element, Length};

/// Cards per grid row.
const GRID_COLUMNS: usize = 3;

/// Contextual data needed to render a grid screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Screen heading (category label or the all-components title).
    pub title: String,
    /// Components shown, in registry order (already filtered).
    pub components: Vec<&'static ComponentMeta>,
    /// Slugs currently favorited.
    pub favorites: BTreeSet<String>,
}

/// Messages emitted by a grid.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the demo screen of a component.
    Open(&'static str),
    /// Toggle the favorite flag of a component.
    ToggleFavorite(&'static str),
}

/// Render a grid screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.title.clone()).size(typography::TITLE_LG);

    let body: Element<'a, Message> = if ctx.components.is_empty() {
        Text::new(ctx.i18n.tr("gallery-empty"))
            .size(typography::BODY_LG)
            .color(theme::muted_text_color())
            .into()
    } else {
        let mut grid = Column::new().spacing(spacing::MD);
        for chunk in ctx.components.chunks(GRID_COLUMNS) {
            let mut row = Row::new().spacing(spacing::MD);
            for &meta in chunk {
                row = row.push(card(ctx.i18n, meta, ctx.favorites.contains(meta.slug)));
            }
            grid = grid.push(row);
        }
        scrollable(grid).into()
    };

    Column::new()
        .spacing(spacing::LG)
        .push(title)
        .push(body)
        .into()
}

/// Build one component card.
fn card<'a>(i18n: &'a I18n, meta: &'static ComponentMeta, favorited: bool) -> Element<'a, Message> {
    let heart: Element<'a, Message> = if favorited {
        icons::tinted(
            icons::sized(icons::heart_filled(), sizing::ICON_SM),
            theme::error_text_color(),
        )
        .into()
    } else {
        icons::themed(icons::sized(icons::heart(), sizing::ICON_SM)).into()
    };

    let favorite_button = button(heart)
        .on_press(Message::ToggleFavorite(meta.slug))
        .padding(spacing::XXS)
        .style(styles::button::quiet);

    let mut title_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(meta.name).size(typography::BODY_LG));

    if meta.is_new {
        title_row = title_row.push(badge::new_badge(i18n));
    }
    if meta.is_premium {
        title_row = title_row.push(badge::premium_badge(i18n));
    }
    title_row = title_row.push(horizontal_space()).push(favorite_button);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(title_row)
        .push(
            Text::new(i18n.tr(meta.category.i18n_key()))
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
        )
        .push(
            Text::new(meta.route())
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
        );

    mouse_area(
        container(content)
            .padding(spacing::MD)
            .width(Length::Fixed(sizing::CARD_WIDTH))
            .height(Length::Fixed(sizing::CARD_HEIGHT))
            .style(styles::container::card),
    )
    .on_press(Message::Open(meta.slug))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn grid_renders_all_components() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            title: "All Components".to_string(),
            components: catalog::all().iter().collect(),
            favorites: BTreeSet::new(),
        };
        let _element = view(ctx);
    }

    #[test]
    fn grid_renders_empty_state() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            title: "All Components".to_string(),
            components: Vec::new(),
            favorites: BTreeSet::new(),
        };
        let _element = view(ctx);
    }

    #[test]
    fn grid_renders_with_favorites() {
        let i18n = I18n::default();
        let mut favorites = BTreeSet::new();
        favorites.insert("shine-button".to_string());
        let ctx = ViewContext {
            i18n: &i18n,
            title: "Buttons".to_string(),
            components: catalog::by_category(crate::catalog::Category::Buttons).collect(),
            favorites,
        };
        let _element = view(ctx);
    }
}
