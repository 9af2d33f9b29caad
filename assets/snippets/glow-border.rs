use glint::ui::widgets::glow_border::{Config, GlowBorder};
use iced::Element;

// A bright trail laps the panel border; `trail` is the fraction of the
// perimeter it covers.
fn glow_border<'a, Message: 'static>(elapsed: f32) -> Element<'a, Message> {
    let config = Config {
        trail: 0.18,
        period_secs: 2.4,
        ..Config::default()
    };

    GlowBorder::new(config, elapsed).into_element()
}
