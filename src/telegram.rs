//! Telegram Bot API client for channel delivery.
//!
//! A thin wrapper over the Bot API's `sendMessage` method. One call delivers
//! one plain-text message to one chat; there is no formatting markup, no
//! attachments, and no retry logic. Delivery failures (bad credentials, bad
//! chat id, transport errors) are returned to the caller rather than
//! swallowed, unlike the fetch side of the pipeline.

use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

const API_BASE: &str = "https://api.telegram.org";

/// Client for posting messages to a Telegram chat or channel.
///
/// Holds the bot token and a reusable HTTP client. The destination chat id
/// is supplied per call, keeping the client free of delivery-target state.
pub struct ChannelBot {
    /// HTTP client reused across calls.
    client: reqwest::Client,
    /// Bot authentication token; part of the request URL, never logged.
    token: String,
}

/// The Bot API response envelope.
///
/// Every Bot API method answers with this shape: `ok` plus either a result
/// payload or an error code and human-readable description. The payload
/// itself is not inspected here; delivery confirmation is `ok == true`.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    error_code: Option<i64>,
    #[serde(default)]
    description: Option<String>,
}

impl ChannelBot {
    /// Create a client for the given bot token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
        }
    }

    /// Send a plain-text message to a chat.
    ///
    /// # Arguments
    ///
    /// * `chat_id` - Destination chat or channel identifier (numeric id or `@channelname`)
    /// * `text` - The message body
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, on an unparseable response
    /// body, or when the Bot API answers `ok == false` (wrong token, unknown
    /// chat, etc.). Errors are not retried.
    #[instrument(level = "info", skip_all, fields(chat_id = %chat_id))]
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), Box<dyn Error>> {
        let url = format!("{API_BASE}/bot{}/sendMessage", self.token);
        let params = [("chat_id", chat_id), ("text", text)];

        let t0 = Instant::now();
        let response = self.client.post(&url).form(&params).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let dt = t0.elapsed();
        debug!(%status, elapsed_ms = dt.as_millis() as u128, "sendMessage response received");

        let parsed: ApiResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(%status, error = %e, "sendMessage response body is not a Bot API envelope");
                return Err(format!("sendMessage returned {status} with an unparseable body").into());
            }
        };

        if !parsed.ok {
            let code = parsed.error_code.unwrap_or(status.as_u16() as i64);
            let description = parsed
                .description
                .unwrap_or_else(|| "no description".to_string());
            warn!(code, %description, "sendMessage rejected");
            return Err(format!("sendMessage rejected ({code}): {description}").into());
        }

        info!(
            chars = text.chars().count(),
            elapsed_ms = dt.as_millis() as u128,
            "Message delivered"
        );
        Ok(())
    }
}

impl fmt::Debug for ChannelBot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelBot").field("token", &"<redacted>").finish()
    }
}
