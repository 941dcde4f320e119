//! The fetch-and-notify pipeline.
//!
//! One [`NewsNotifier::run`] call walks a linear path: fetch the listing
//! page, resolve the newest article link, fetch the article, extract and
//! compose its text, and deliver at most one message. Every fetch or
//! extraction miss collapses the run into "nothing to send"; only delivery
//! failures surface to the caller.

use crate::scrapers::asn;
use crate::telegram::ChannelBot;
use reqwest::StatusCode;
use std::error::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Configuration for a pipeline run, built once at process entry.
///
/// Methods never reach into ambient global state; everything a run needs
/// arrives through this value and the bot client.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// The listing page checked for the newest article.
    pub listing_url: String,
    /// Base URL that relative article links resolve against.
    pub base_url: Url,
    /// Destination chat or channel identifier.
    pub chat_id: String,
}

/// Orchestrates one fetch → extract → send cycle.
pub struct NewsNotifier {
    config: NotifierConfig,
    bot: ChannelBot,
    client: reqwest::Client,
}

impl NewsNotifier {
    /// Create a notifier from explicit configuration and a bot client.
    pub fn new(config: NotifierConfig, bot: ChannelBot) -> Self {
        Self {
            config,
            bot,
            client: reqwest::Client::new(),
        }
    }

    /// Run the pipeline exactly once.
    ///
    /// Sends at most one message: the composed text of the newest article,
    /// and only when that text is non-empty. A failed fetch, a listing page
    /// without an article link, or an article without extractable text all
    /// end the run normally with an informational log line.
    ///
    /// # Errors
    ///
    /// Only delivery failures are returned; everything upstream of the send
    /// is absorbed as "no news available right now".
    #[instrument(level = "info", skip_all)]
    pub async fn run(&self) -> Result<(), Box<dyn Error>> {
        let Some(listing_html) = self.fetch_page(&self.config.listing_url).await else {
            info!(stage = "listing-fetch", "No news available right now");
            return Ok(());
        };

        let Some(article_url) = asn::latest_article_link(&listing_html, &self.config.base_url)
        else {
            info!(stage = "link-resolve", "No news available right now");
            return Ok(());
        };
        info!(url = %article_url, "Resolved latest article link");

        let Some(article_html) = self.fetch_page(article_url.as_str()).await else {
            info!(stage = "article-fetch", "No news available right now");
            return Ok(());
        };

        let message = asn::article_sections(&article_html).message();
        if message.is_empty() {
            info!(stage = "extraction", "No news available right now");
            return Ok(());
        }
        info!(chars = message.chars().count(), "Got news");

        self.bot.send_message(&self.config.chat_id, &message).await?;
        info!("Sent news to channel");
        Ok(())
    }

    /// Fetch a page, absorbing every failure into `None`.
    ///
    /// Success means HTTP 200 with a readable body; any other status, a
    /// transport error, or a body decode error is logged and reported as
    /// "no content".
    #[instrument(level = "debug", skip_all, fields(%url))]
    async fn fetch_page(&self, url: &str) -> Option<String> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Page fetch failed");
                return None;
            }
        };

        let status = response.status();
        debug!(status = %status, "Fetched page");
        if status != StatusCode::OK {
            return None;
        }

        match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(error = %e, "Failed reading page body");
                None
            }
        }
    }
}
