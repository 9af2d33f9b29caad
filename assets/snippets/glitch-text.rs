use glint::ui::widgets::glitch_text::{Config, GlitchText};
use iced::Element;

// Two tinted copies jitter around the base text during a short spike
// window at the start of each cycle.
fn glitch_text<'a, Message: 'static>(elapsed: f32) -> Element<'a, Message> {
    let config = Config {
        content: "GLITCH".to_string(),
        period_secs: 2.0,
        ..Config::default()
    };

    GlitchText::new(config, elapsed).into_element()
}
