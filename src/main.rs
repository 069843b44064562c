// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> iced::Result {
    // RUST_LOG controls verbosity, e.g. RUST_LOG=iced_toasts=debug
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("iced_toasts=info"));
    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --lang");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --config-dir");
            None
        }),
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    app::run(flags)
}
