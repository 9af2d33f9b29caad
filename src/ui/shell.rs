// SPDX-License-Identifier: MPL-2.0
//! Page shell composing the sidebar, header, and routed content.
//!
//! The shell receives the layout snapshot by value and lays the three
//! regions out from it, so sidebar, header, and content can never
//! disagree about the collapsed state within one render.

use crate::ui::design_tokens::spacing;
use crate::ui::state::LayoutState;
use iced::widget::{container, Column, Row};
use iced::{Element, Length};

/// Compose the page shell around routed `content`.
///
/// `sidebar` and `header` are prebuilt elements so the shell stays
/// agnostic of their messages; the caller maps everything into its own
/// message type first.
pub fn compose<'a, Message: 'a>(
    layout: LayoutState,
    sidebar: Element<'a, Message>,
    header: Element<'a, Message>,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let main = Column::new()
        .push(container(header).width(Length::Fill))
        .push(
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::LG),
        );

    Row::new()
        .push(
            container(sidebar)
                .width(Length::Fixed(layout.sidebar_width()))
                .height(Length::Fill),
        )
        .push(main)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::text;

    fn parts<'a>() -> (
        Element<'a, ()>,
        Element<'a, ()>,
        Element<'a, ()>,
    ) {
        (
            text("sidebar").into(),
            text("header").into(),
            text("content").into(),
        )
    }

    #[test]
    fn compose_renders_expanded() {
        let (sidebar, header, content) = parts();
        let _element = compose(LayoutState::new(), sidebar, header, content);
    }

    #[test]
    fn compose_renders_collapsed() {
        let mut layout = LayoutState::new();
        layout.set_collapsed(true);
        let (sidebar, header, content) = parts();
        let _element = compose(layout, sidebar, header, content);
    }
}
