use glint::ui::widgets::spotlight_card::{Config, SpotlightCard};
use iced::Element;

// The spotlight reads the cursor position straight from the canvas draw
// call; no clock and no state are needed.
fn spotlight_card<'a, Message: 'static>() -> Element<'a, Message> {
    let config = Config {
        title: "Spotlight".to_string(),
        body: "Move the cursor over this card".to_string(),
        spotlight_radius: 120.0,
        ..Config::default()
    };

    SpotlightCard::new(config).into_element()
}
