//! Client for the Dat debugging UI.
//!
//! Ships structured debug messages from application code to a local debug
//! server over HTTP (`http://127.0.0.1:3030` by default). Values are
//! serialized with serde, formatted for display, tagged with the caller's
//! file and line, and POSTed to `/debug`.
//!
//! # Fail-silent by design
//!
//! Every network operation is best-effort with one-second timeouts. A dead
//! or unreachable server never surfaces an error, and `APP_ENV=production`
//! disables the client entirely. The only helper that alters control flow
//! is `datd!`, which exits the process on purpose.
//!
//! # Usage
//!
//! ```no_run
//! use dat::{dat, dat_if, dat_once, Color};
//!
//! dat!("checkout started", vec![1, 2, 3]);
//! dat!().color(Color::Green).screen("billing").arg(&"charged").send();
//! dat_if!(cfg!(debug_assertions), "debug build");
//! dat_once!("you will see this once per process");
//!
//! // Tap a value without disturbing the expression around it.
//! let total = dat!().pass(19.99 + 1.50);
//! ```
//!
//! The macros share one process-wide handle configured from the
//! environment (`DAT_HOST`, `DAT_PORT`, `DAT_ENABLED`). Construct your own
//! [`Dat`] when you need isolation, e.g. one handle per task or per test.

#![forbid(unsafe_code)]

mod builder;
mod client;
mod config;
mod error;
mod format;
mod macros;
mod message;

pub mod caller;

pub use builder::MessageBuilder;
pub use caller::{CallSite, CallerInfo, TraceFrame};
pub use client::Dat;
pub use config::{is_production, Config};
pub use error::{Error, Result};
pub use message::{Color, DebugMessage};
