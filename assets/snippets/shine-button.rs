use glint::ui::widgets::shine_button::{Config, ShineButton};
use iced::{Color, Element};

// Drive `elapsed` from your update loop, e.g. a `time::every` subscription
// feeding `Tick(Instant)` into an `AnimationClock`.
fn shine_button<'a, Message: 'static>(elapsed: f32) -> Element<'a, Message> {
    let config = Config {
        label: "Get started".to_string(),
        period_secs: 2.4,
        highlight_color: Color { a: 0.55, ..Color::WHITE },
        ..Config::default()
    };

    ShineButton::new(config, elapsed).into_element()
}
