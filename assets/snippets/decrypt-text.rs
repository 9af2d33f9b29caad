use glint::ui::widgets::decrypt_text::{Config, DecryptText};
use iced::Element;

// The reveal advances left to right at `chars_per_sec`; characters still
// hidden cycle through a deterministic scramble.
fn decrypt_text<'a, Message: 'static>(elapsed: f32) -> Element<'a, Message> {
    let config = Config {
        content: "ACCESS GRANTED".to_string(),
        chars_per_sec: 12.0,
        ..Config::default()
    };

    DecryptText::new(config, elapsed).into_element()
}
