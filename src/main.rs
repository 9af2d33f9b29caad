// SPDX-License-Identifier: MPL-2.0
use glint::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_default(),
        theme: args.opt_value_from_str("--theme").unwrap_or_default(),
        data_dir: args.opt_value_from_str("--data-dir").unwrap_or_default(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_default(),
    };

    app::run(flags)
}
