use glint::ui::widgets::ripple_button::{Config, RippleButton};
use iced::Element;

// Clicks are captured by the canvas itself; each one spawns a ripple
// that expands and fades over `ripple_secs`.
fn ripple_button<'a, Message: 'static>(elapsed: f32) -> Element<'a, Message> {
    let config = Config {
        label: "Click me".to_string(),
        ripple_secs: 0.6,
        ..Config::default()
    };

    RippleButton::new(config, elapsed).into_element()
}
