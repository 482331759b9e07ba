use std::panic::{self, PanicHookInfo};

use color_eyre::config::{HookBuilder, PanicHook};
use color_eyre::eyre::Result;

use crate::infrastructure::tui;

/// Installs the eyre report handler and a panic hook. The hook first hands
/// the terminal back to the shell, then logs the report and exits.
pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "{} crashed. Please file an issue with the log at {}",
            env!("CARGO_PKG_NAME"),
            crate::utils::get_data_dir().display()
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |info| {
        if let Err(e) = tui::restore() {
            tracing::error!("Could not restore the terminal: {e:?}");
        }
        log_report(&panic_hook, info);
        print_report(&panic_hook, info);
        std::process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

fn log_report(panic_hook: &PanicHook, info: &PanicHookInfo<'_>) {
    let report = panic_hook.panic_report(info).to_string();
    tracing::error!("Panic: {}", strip_ansi_escapes::strip_str(report));
}

/// Release builds write a crash dump through human-panic.
#[cfg(not(debug_assertions))]
fn print_report(panic_hook: &PanicHook, info: &PanicHookInfo<'_>) {
    let metadata = human_panic::Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
        .homepage(env!("CARGO_PKG_HOMEPAGE"));
    let dump = human_panic::handle_dump(&metadata, info);
    if let Err(e) = human_panic::print_msg(dump, &metadata) {
        eprintln!("human-panic: printing error message to console failed: {e}");
    }
    eprintln!("{}", panic_hook.panic_report(info));
}

/// Debug builds get a full, oldest-frame-first backtrace from better-panic.
#[cfg(debug_assertions)]
fn print_report(_panic_hook: &PanicHook, info: &PanicHookInfo<'_>) {
    better_panic::Settings::auto()
        .most_recent_first(false)
        .lineno_suffix(true)
        .verbosity(better_panic::Verbosity::Full)
        .create_panic_handler()(info);
}
