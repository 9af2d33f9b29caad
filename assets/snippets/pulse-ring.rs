use glint::ui::widgets::pulse_ring::{Config, PulseRing};
use iced::Element;

// Rings are evenly spaced across the cycle, so one is always mid-flight.
fn pulse_ring<'a, Message: 'static>(elapsed: f32) -> Element<'a, Message> {
    let config = Config {
        ring_count: 3,
        max_radius: 56.0,
        ..Config::default()
    };

    PulseRing::new(config, elapsed).into_element()
}
