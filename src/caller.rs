//! Call-site and stack-trace capture.
//!
//! Caller resolution is deliberately a narrow interface: the rest of the
//! crate only ever sees a plain (file, line) pair, so tests can construct
//! one directly instead of depending on real stack inspection.
//!
//! `#[track_caller]` does the frame-skipping declaratively: a location
//! captured inside the sender reports the application call site, not the
//! sender or helper-macro internals.

use std::backtrace::Backtrace;
use std::panic::Location;

use serde::Serialize;

/// File and line of the application code that triggered a send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallerInfo {
    pub file: String,
    pub line: u32,
}

impl CallerInfo {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Capture the caller of the nearest non-`#[track_caller]` frame.
    #[track_caller]
    pub fn capture() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line())
    }
}

/// Invocation-site details sent by `dat_caller!`.
///
/// `module` is Rust's analog of an enclosing function/type name; the
/// column disambiguates multiple invocations on one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
    pub module: &'static str,
}

/// One frame of a captured stack trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceFrame {
    /// Symbol name, as rendered by the platform backtrace.
    pub symbol: String,
    /// `file:line:column` of the frame, when resolvable.
    pub location: Option<String>,
}

/// Capture up to `limit` stack frames (0 = unlimited).
///
/// Frames from the capture machinery itself (everything up to and
/// including this function) are dropped before the limit applies, so a
/// small limit returns application frames, not library internals.
///
/// Returns an empty list on platforms where backtraces are unsupported
/// or symbols were stripped.
pub fn capture_trace(limit: usize) -> Vec<TraceFrame> {
    parse_backtrace(&Backtrace::force_capture().to_string(), limit)
}

/// Parse the std `Backtrace` display format into structured frames.
///
/// The format is a numbered symbol line optionally followed by an
/// indented `at file:line:column` line:
///
/// ```text
///    4: app::checkout::charge
///              at ./src/checkout.rs:88:13
/// ```
fn parse_backtrace(raw: &str, limit: usize) -> Vec<TraceFrame> {
    let mut frames: Vec<TraceFrame> = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();

        if let Some((index, symbol)) = trimmed.split_once(": ") {
            if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) {
                frames.push(TraceFrame {
                    symbol: symbol.to_string(),
                    location: None,
                });
                continue;
            }
        }

        if let Some(location) = trimmed.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                if frame.location.is_none() {
                    frame.location = Some(location.to_string());
                }
            }
        }
    }

    // Innermost frames are the backtrace/capture machinery. Drop
    // everything up to and including `capture_trace` so the limit
    // budget is spent on application frames. Symbols may be missing
    // entirely under aggressive inlining; then nothing is dropped.
    if let Some(pos) = frames
        .iter()
        .rposition(|frame| frame.symbol.contains("caller::capture_trace"))
    {
        frames.drain(..=pos);
    }

    if limit != 0 {
        frames.truncate(limit);
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
   0: std::backtrace::Backtrace::capture
             at /rustc/abc/library/std/src/backtrace.rs:331:9
   1: app::checkout::charge
             at ./src/checkout.rs:88:13
   2: app::main
   3: core::ops::function::FnOnce::call_once
             at /rustc/abc/library/core/src/ops/function.rs:250:5
";

    #[test]
    fn capture_reports_this_file() {
        let caller = CallerInfo::capture();
        assert!(caller.file.ends_with("caller.rs"));
        assert!(caller.line > 0);
    }

    #[test]
    fn parses_symbols_and_locations() {
        let frames = parse_backtrace(SAMPLE, 0);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[1].symbol, "app::checkout::charge");
        assert_eq!(frames[1].location.as_deref(), Some("./src/checkout.rs:88:13"));
        assert_eq!(frames[2].symbol, "app::main");
        assert_eq!(frames[2].location, None);
    }

    #[test]
    fn limit_truncates_frames() {
        let frames = parse_backtrace(SAMPLE, 2);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].symbol, "std::backtrace::Backtrace::capture");
    }

    #[test]
    fn zero_limit_means_unlimited() {
        assert_eq!(parse_backtrace(SAMPLE, 0).len(), 4);
    }

    #[test]
    fn capture_machinery_frames_are_skipped_before_the_limit() {
        let raw = "\
   0: std::backtrace_rs::backtrace::libunwind::trace
             at /rustc/abc/library/std/src/sys/backtrace.rs:66:5
   1: std::backtrace::Backtrace::force_capture
   2: dat::caller::capture_trace
             at ./src/caller.rs:70:21
   3: app::checkout::charge
             at ./src/checkout.rs:88:13
   4: app::main
";
        let frames = parse_backtrace(raw, 1);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].symbol, "app::checkout::charge");

        let unlimited = parse_backtrace(raw, 0);
        assert_eq!(unlimited.len(), 2);
        assert_eq!(unlimited[1].symbol, "app::main");
    }

    #[test]
    fn garbage_input_yields_no_frames() {
        assert!(parse_backtrace("disabled backtrace", 0).is_empty());
        assert!(parse_backtrace("", 5).is_empty());
    }

    #[test]
    fn live_capture_respects_limit() {
        let frames = capture_trace(3);
        assert!(frames.len() <= 3);
    }
}
