pub mod state;
mod logging;

uniffi::setup_scaffolding!();

/// Print panics with a backtrace to stderr.
/// Call this once at startup from Kotlin/Swift, unless [`init_logging`] is used,
/// which installs its own hook that reports panics through `tracing`.
#[uniffi::export]
pub fn init_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        eprintln!("=== RUST PANIC ===");
        eprintln!("{panic_info}");
        eprintln!("Backtrace:\n{backtrace}");
        eprintln!("=== END PANIC ===");
    }));
}

/// Route `tracing` output to logcat (Android) or stderr, and log panics through it.
/// Replaces the hook installed by [`init_panic_handler`].
#[uniffi::export]
pub fn init_logging() {
    logging::setup_logging();
}
