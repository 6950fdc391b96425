//! The variadic helper surface.
//!
//! Rust has no variadic functions, so the helpers are macros. All of them
//! funnel through [`Dat::global`](crate::Dat::global)
//! and capture `file!()`/`line!()` at the invocation site, the same way the
//! `log` and `tracing` macros resolve their call sites.

/// Ship the given values to the debug server.
///
/// With no arguments, returns a fresh [`MessageBuilder`](crate::MessageBuilder)
/// on the shared handle for chaining:
///
/// ```no_run
/// use dat::dat;
///
/// dat!("order placed", 42);
/// dat!().green().screen("orders").arg(&"charged").send();
/// dat!().clear_all();
/// ```
#[macro_export]
macro_rules! dat {
    () => {
        $crate::Dat::global().message()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::Dat::global()
            .message()
            $(.arg(&$arg))+
            .send_from($crate::CallerInfo::new(file!(), line!()))
    };
}

/// Ship the given values, then terminate the process with exit status 1.
///
/// The one member of the family that is deliberately intrusive.
#[macro_export]
macro_rules! datd {
    ($($arg:expr),* $(,)?) => {{
        let _ = $crate::dat!($($arg),*);
        ::std::process::exit(1)
    }};
}

/// Ship the given values only when `condition` is true.
///
/// A false condition makes no network call and returns the usual builder.
#[macro_export]
macro_rules! dat_if {
    ($condition:expr, $($arg:expr),+ $(,)?) => {
        if $condition {
            $crate::dat!($($arg),+)
        } else {
            $crate::Dat::global().message()
        }
    };
    ($condition:expr $(,)?) => {{
        let _ = $condition;
        $crate::Dat::global().message()
    }};
}

/// Ship the given values on the first invocation in this process; every
/// later invocation is a no-op, regardless of call site or arguments.
#[macro_export]
macro_rules! dat_once {
    ($($arg:expr),+ $(,)?) => {
        if $crate::Dat::global().mark_once() {
            $crate::dat!($($arg),+)
        } else {
            $crate::Dat::global().message()
        }
    };
    () => {{
        let _ = $crate::Dat::global().mark_once();
        $crate::Dat::global().message()
    }};
}

/// Capture the current stack trace and ship it as a single structured
/// argument. An optional limit caps the frame count (0 = unlimited).
#[macro_export]
macro_rules! dat_trace {
    () => {
        $crate::dat_trace!(0)
    };
    ($limit:expr) => {
        $crate::Dat::global()
            .message()
            .arg(&$crate::caller::capture_trace($limit))
            .send_from($crate::CallerInfo::new(file!(), line!()))
    };
}

/// Ship the invocation site (file, line, column, module) as a single
/// structured argument.
#[macro_export]
macro_rules! dat_caller {
    () => {
        $crate::Dat::global()
            .message()
            .arg(&$crate::CallSite {
                file: file!(),
                line: line!(),
                column: column!(),
                module: module_path!(),
            })
            .send_from($crate::CallerInfo::new(file!(), line!()))
    };
}
