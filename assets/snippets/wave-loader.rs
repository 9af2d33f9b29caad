use glint::ui::widgets::wave_loader::{Config, WaveLoader};
use iced::Element;

// Bar heights follow a travelling sine wave; `min_ratio` keeps troughs
// from collapsing to nothing.
fn wave_loader<'a, Message: 'static>(elapsed: f32) -> Element<'a, Message> {
    let config = Config {
        bar_count: 5,
        min_ratio: 0.3,
        ..Config::default()
    };

    WaveLoader::new(config, elapsed).into_element()
}
