//! Custom panic hook for structured crash reports.
//!
//! A panic inside the classifier is caught at the request boundary and
//! turned into an internal error, so the process keeps serving. The hook
//! still runs first and leaves a report on stderr saying what was being
//! analyzed when it happened.

use super::context::{get_current_context, get_progress, AnalysisContext};
use std::any::Any;
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const ISSUE_URL: &str = "https://github.com/iepathos/sentimap/issues/new";
const WIDTH: usize = 78;

/// Install the crash report hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

/// Human-readable text of a panic payload.
pub fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();
    let (processed, total) = get_progress();

    log::error!(
        "panic during {}: {}",
        context
            .phase
            .map_or_else(|| "startup".to_string(), |p| p.to_string()),
        payload_message(info.payload())
    );

    eprintln!();
    print_rule('╔', '╗');
    print_row("SENTIMAP CRASH REPORT");
    print_rule('╠', '╣');
    print_row(&format!("Version: {}", VERSION));
    print_row(&format!("Platform: {}", std::env::consts::OS));
    print_row(&format!(
        "Time: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    print_rule('╠', '╣');
    print_row(&format!("PANIC: {}", payload_message(info.payload())));
    if let Some(location) = info.location() {
        print_row(&format!(
            "Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        ));
    }
    print_rule('╠', '╣');
    print_context_section(&context, processed, total);
    print_rule('╚', '╝');

    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("{}", std::backtrace::Backtrace::capture());
    }
    eprintln!("To report this issue: {}", ISSUE_URL);
}

fn print_context_section(context: &AnalysisContext, processed: usize, total: usize) {
    print_row("OPERATION CONTEXT:");
    match context.phase {
        Some(phase) => print_row(&format!("  Phase: {}", phase)),
        None => print_row("  Phase: (not set - crash occurred outside analysis)"),
    }
    if let Some(index) = context.sentence_index {
        print_row(&format!("  Sentence: #{}", index + 1));
    }
    if let Some(metadata) = Span::current().metadata() {
        print_row(&format!("  Span: {}", metadata.name()));
    }
    if total > 0 {
        print_row(&format!("  Progress: {} / {} documents", processed, total));
    }
}

fn print_rule(left: char, right: char) {
    eprintln!("{}{}{}", left, "═".repeat(WIDTH), right);
}

fn print_row(text: &str) {
    eprintln!("║  {:<width$}║", truncate(text, WIDTH - 2), width = WIDTH - 2);
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
