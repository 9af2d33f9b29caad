use glint::ui::widgets::orbit_loader::{Config, OrbitLoader};
use iced::Element;

// Two counter-rotating half arcs around a faint track.
fn orbit_loader<'a, Message: 'static>(elapsed: f32) -> Element<'a, Message> {
    let config = Config {
        size: 64.0,
        period_secs: 1.2,
        ..Config::default()
    };

    OrbitLoader::new(config, elapsed).into_element()
}
