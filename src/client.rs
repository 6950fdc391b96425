//! The `Dat` handle: owns the HTTP client and the delivery path.
//!
//! Every network operation here is best-effort. Connection failures,
//! timeouts and error statuses are logged at debug level and otherwise
//! discarded: instrumentation must never crash or alter the behavior of
//! the instrumented application.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;
use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::builder::MessageBuilder;
use crate::caller::CallerInfo;
use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::format::format_arguments;
use crate::message::{Color, DebugMessage};

/// Connect and request timeout for every call to the debug server.
///
/// Bounds the worst-case latency a dead or slow server can add to the
/// host application to about one second per call.
const NETWORK_TIMEOUT: Duration = Duration::from_secs(1);

/// Handle to a Dat debug server.
///
/// Holds one long-lived blocking HTTP client. A handle computed as
/// disabled (explicit flag off, or `APP_ENV=production`) holds no client
/// at all and performs zero network work for the rest of its life.
#[derive(Debug)]
pub struct Dat {
    base_url: String,
    enabled: bool,
    client: Option<reqwest::blocking::Client>,
    once: AtomicBool,
}

impl Dat {
    /// Create a handle for a server at `host:port`.
    ///
    /// Effective enablement is `enabled && !is_production()`. A failure
    /// to construct the HTTP client degrades to a disabled handle rather
    /// than propagating.
    pub fn new(host: impl Into<String>, port: u16, enabled: bool) -> Self {
        Self::from_config(Config {
            host: host.into(),
            port,
            enabled,
        })
    }

    /// Create a handle, surfacing HTTP client construction failure.
    pub fn try_new(config: Config) -> Result<Self> {
        let enabled = config.enabled && !config::is_production();
        let client = if enabled {
            let client = reqwest::blocking::Client::builder()
                .timeout(NETWORK_TIMEOUT)
                .connect_timeout(NETWORK_TIMEOUT)
                .build()
                .map_err(Error::Client)?;
            Some(client)
        } else {
            None
        };

        Ok(Self {
            base_url: config.base_url(),
            enabled,
            client,
            once: AtomicBool::new(false),
        })
    }

    /// The process-wide shared handle, lazily initialized from the
    /// environment (`DAT_HOST`, `DAT_PORT`, `DAT_ENABLED`, `APP_ENV`).
    ///
    /// All `dat!`-family macros funnel through this instance. Code that
    /// needs isolation (per task, or in tests) should construct its own
    /// handle with [`Dat::new`] instead.
    pub fn global() -> &'static Dat {
        static GLOBAL: OnceLock<Dat> = OnceLock::new();
        GLOBAL.get_or_init(|| Self::from_config(Config::from_env()))
    }

    fn from_config(config: Config) -> Self {
        Self::try_new(config.clone()).unwrap_or_else(|e| {
            debug!("dat client unavailable, debugging disabled: {}", e);
            Self {
                base_url: config.base_url(),
                enabled: false,
                client: None,
                once: AtomicBool::new(false),
            }
        })
    }

    /// Whether this handle will actually talk to the server.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Base URL of the debug server this handle targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start building a message against this handle.
    pub fn message(&self) -> MessageBuilder<'_> {
        MessageBuilder::new(self)
    }

    /// Once-per-instance cell backing `dat_once!`: true on the first
    /// call, false on every call after that.
    pub fn mark_once(&self) -> bool {
        !self.once.swap(true, Ordering::Relaxed)
    }

    /// Ask the server to clear all recorded messages.
    pub fn clear_all(&self) -> &Self {
        if self.enabled {
            if let Err(e) = self.post_empty("/clear/all") {
                debug!("clear-all request failed: {}", e);
            }
        }
        self
    }

    /// Ask the server to clear the currently active screen.
    pub fn clear_screen(&self) -> &Self {
        if self.enabled {
            if let Err(e) = self.post_empty("/clear/screen") {
                debug!("clear-screen request failed: {}", e);
            }
        }
        self
    }

    /// Deliver one message. Called by the builder's terminal methods.
    ///
    /// A set pause flag fires `/pause` before the message itself. An
    /// empty argument list sends nothing (but still honors the pause
    /// flag, matching the server's expected ordering).
    pub(crate) fn dispatch(
        &self,
        arguments: Vec<Value>,
        color: Option<Color>,
        level: Option<String>,
        screen: Option<String>,
        pause: bool,
        caller: CallerInfo,
    ) {
        if !self.enabled {
            return;
        }

        if pause {
            if let Err(e) = self.post_empty("/pause") {
                debug!("pause request failed: {}", e);
            }
        }

        if arguments.is_empty() {
            return;
        }

        let payload = DebugMessage {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().timestamp(),
            message: format_arguments(&arguments),
            arguments,
            source_file: Some(caller.file),
            source_line: Some(caller.line),
            color,
            level,
            screen,
            execution_time: Utc::now().timestamp_micros() as f64 / 1000.0,
        };

        if let Err(e) = self.post_json("/debug", &payload) {
            debug!("debug message delivery failed: {}", e);
        }
    }

    fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<()> {
        let Some(client) = self.client.as_ref() else {
            return Ok(());
        };
        let url = format!("{}{}", self.base_url, path);
        client
            .post(url.as_str())
            .json(body)
            .send()
            .map_err(|source| Error::Request { url, source })?;
        Ok(())
    }

    fn post_empty(&self, path: &str) -> Result<()> {
        let Some(client) = self.client.as_ref() else {
            return Ok(());
        };
        let url = format!("{}{}", self.base_url, path);
        client
            .post(url.as_str())
            .send()
            .map_err(|source| Error::Request { url, source })?;
        Ok(())
    }
}
