//! Immutable message builder.
//!
//! Each configuration call consumes the builder and returns a new value;
//! only the terminal `send`/`pass` calls touch the network. Configuration
//! therefore applies to exactly one send, and the builder handed back by
//! `send` carries default options again. Nothing is shared, so concurrent
//! callers against one handle cannot race each other's options.

use serde::Serialize;
use serde_json::Value;

use crate::caller::CallerInfo;
use crate::client::Dat;
use crate::message::{to_arg, Color};

/// Accumulates arguments and presentation options for one debug message.
///
/// Obtained from [`Dat::message`] or the `dat!()` macro.
#[derive(Debug, Clone)]
pub struct MessageBuilder<'a> {
    dat: &'a Dat,
    arguments: Vec<Value>,
    color: Option<Color>,
    level: Option<String>,
    screen: Option<String>,
    pause: bool,
}

impl<'a> MessageBuilder<'a> {
    pub(crate) fn new(dat: &'a Dat) -> Self {
        Self {
            dat,
            arguments: Vec::new(),
            color: None,
            level: None,
            screen: None,
            pause: false,
        }
    }

    /// Append one argument to the pending message.
    pub fn arg<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        self.arguments.push(to_arg(value));
        self
    }

    /// Set the display color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set a free-form level tag (e.g. `info`, `error`).
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Route the message to a named screen in the debug UI.
    pub fn screen(mut self, name: impl Into<String>) -> Self {
        self.screen = Some(name.into());
        self
    }

    pub fn red(self) -> Self {
        self.color(Color::Red)
    }

    pub fn green(self) -> Self {
        self.color(Color::Green)
    }

    pub fn blue(self) -> Self {
        self.color(Color::Blue)
    }

    pub fn yellow(self) -> Self {
        self.color(Color::Yellow)
    }

    pub fn orange(self) -> Self {
        self.color(Color::Orange)
    }

    pub fn purple(self) -> Self {
        self.color(Color::Purple)
    }

    pub fn gray(self) -> Self {
        self.color(Color::Gray)
    }

    /// Signal the debug UI to pause before this message is delivered.
    pub fn pause(mut self) -> Self {
        self.pause = true;
        self
    }

    /// Send the pending message and return a fresh builder.
    ///
    /// With no arguments accumulated this is a no-op (a set pause flag
    /// still fires). Network failures are swallowed.
    #[track_caller]
    pub fn send(self) -> MessageBuilder<'a> {
        let caller = CallerInfo::capture();
        self.send_from(caller)
    }

    /// Send with explicit caller info. The macro surface captures
    /// `file!()`/`line!()` at the invocation site and routes it here.
    pub fn send_from(self, caller: CallerInfo) -> MessageBuilder<'a> {
        let Self {
            dat,
            arguments,
            color,
            level,
            screen,
            pause,
        } = self;
        dat.dispatch(arguments, color, level, screen, pause, caller);
        dat.message()
    }

    /// Send `value` as the sole argument, then hand it back unchanged.
    ///
    /// Lets a debug tap sit inline in an expression:
    /// `let total = dat!().pass(subtotal + tax);`
    #[track_caller]
    pub fn pass<T: Serialize>(self, value: T) -> T {
        let caller = CallerInfo::capture();
        self.arg(&value).send_from(caller);
        value
    }

    /// Clear all recorded messages on the server.
    pub fn clear_all(self) -> Self {
        self.dat.clear_all();
        self
    }

    /// Clear the currently active screen on the server.
    pub fn clear_screen(self) -> Self {
        self.dat.clear_screen();
        self
    }
}
