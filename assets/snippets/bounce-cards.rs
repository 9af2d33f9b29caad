use glint::ui::widgets::bounce_cards::{BounceCards, Config};
use iced::Element;

// Cards rise smoothly and land with a bounce; `stagger_secs` trails each
// card behind its neighbour.
fn bounce_cards<'a, Message: 'static>(elapsed: f32) -> Element<'a, Message> {
    let config = Config {
        card_count: 3,
        stagger_secs: 0.18,
        amplitude: 36.0,
        ..Config::default()
    };

    BounceCards::new(config, elapsed).into_element()
}
