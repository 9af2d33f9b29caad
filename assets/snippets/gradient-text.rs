use glint::ui::widgets::gradient_text::{Config, GradientText};
use iced::{Color, Element};

// Each character samples the wrapping gradient slightly ahead of its
// neighbour, so the colors flow through the word.
fn gradient_text<'a, Message: 'static>(elapsed: f32) -> Element<'a, Message> {
    let config = Config {
        content: "Gradient".to_string(),
        stops: [
            Color::from_rgb(0.65, 0.5, 0.95),
            Color::from_rgb(0.3, 0.85, 0.95),
            Color::from_rgb(0.85, 0.78, 0.98),
        ],
        ..Config::default()
    };

    GradientText::new(config, elapsed).into_element()
}
