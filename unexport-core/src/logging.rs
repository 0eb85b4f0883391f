//! Structured logging for analysis audit trails using **tracing**.
//!
//! Performance characteristics:
//! - Non-blocking: tracing macros push events to a queue, not directly to I/O
//! - Parallel-safe: works efficiently with Rayon's scan workers
//! - Rich context: automatically captures level, timestamp, target, and thread ID
//!
//! Per-match diagnostics from the cross-module scan are emitted at debug
//! level; they are purely observational and never affect results.

/// Initializes the global tracing collector (subscriber).
///
/// This should be called *once* at the beginning of the application's runtime.
/// It configures structured JSON output to stderr.
///
/// When `verbose` is set the default filter is `debug`, which surfaces the
/// per-match diagnostics of the scan phase.
///
/// # Environment Variables
/// - `RUST_LOG`: Overrides the default filter (e.g., `RUST_LOG=unexport_core=debug`)
pub fn init_structured_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .json() // Output logs in JSON format
        .with_ansi(false) // Disable ANSI codes in JSON output
        .with_level(true) // Include the log level field
        .with_target(true) // Include the module path (target)
        .with_current_span(true) // Include tracing span context
        .with_env_filter(filter)
        .with_writer(std::io::stderr) // Write to stderr (keeps stdout clean for tool output)
        .init();
}
