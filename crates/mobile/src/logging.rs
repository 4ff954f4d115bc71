use std::{panic::PanicHookInfo, sync::Once};

use tracing_subscriber::{
    filter::FilterFn, fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_TAG: &str = "WarmerWalker-Rust";

/// Installs the tracing subscriber and a panic hook that logs through it.
/// Safe to call more than once; only the first call does anything.
pub(crate) fn setup_logging() {
    static LOGGING_SETUP: Once = Once::new();

    LOGGING_SETUP.call_once(|| {
        let filter = FilterFn::new(|metadata| {
            metadata
                .module_path()
                .unwrap_or_default()
                .starts_with("warmer_walker")
        });

        #[cfg(target_os = "android")]
        let result = {
            use tracing_logcat::{LogcatMakeWriter, LogcatTag};

            let writer = match LogcatMakeWriter::new(LogcatTag::Fixed(LOG_TAG.to_owned())) {
                Ok(writer) => writer,
                Err(error) => {
                    eprintln!("{LOG_TAG}: failed to initialize logcat writer: {error}");
                    return;
                }
            };
            let layer = tracing_subscriber::fmt::layer()
                .event_format(Format::default().with_level(false).without_time())
                .with_writer(writer)
                .with_ansi(false);
            tracing_subscriber::registry().with(layer).with(filter).try_init()
        };

        #[cfg(not(target_os = "android"))]
        let result = {
            let layer = tracing_subscriber::fmt::layer()
                .event_format(Format::default().with_target(false).without_time())
                .with_writer(std::io::stderr)
                .with_ansi(false);
            tracing_subscriber::registry().with(layer).with(filter).try_init()
        };

        if let Err(error) = result {
            eprintln!("{LOG_TAG}: a tracing subscriber is already installed: {error}");
        }

        std::panic::set_hook(Box::new(panic_hook));
    })
}

fn panic_hook(info: &PanicHookInfo) {
    tracing::error!("{info}")
}
