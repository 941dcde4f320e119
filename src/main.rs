//! # ASN News Bot
//!
//! A single-shot notifier that checks the ASN news listing for the most
//! recent article and forwards its text to a Telegram channel.
//!
//! ## Pipeline
//!
//! One invocation performs one check:
//! 1. **Fetch** the news listing page
//! 2. **Resolve** the newest article link
//! 3. **Fetch** the article page and extract title, lead, and body text
//! 4. **Send** the composed text as a single message to the channel
//!
//! Anything that leaves the pipeline without text to send (unreachable site,
//! no article link, empty extraction) ends the run normally; only a failed
//! delivery exits with an error.
//!
//! ## Usage
//!
//! ```sh
//! TOKEN=123456:abcdef CHAT_ID=@my_channel asn_news_bot
//! ```

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};
use url::Url;

mod cli;
mod models;
mod notifier;
mod scrapers;
mod telegram;
mod utils;

use cli::Cli;
use notifier::{NewsNotifier, NotifierConfig};
use telegram::ChannelBot;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("asn_news_bot starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(listing_url = %args.listing_url, chat_id = %args.chat_id, "Parsed CLI arguments");

    // --- Build the notifier from explicit configuration ---
    let config = NotifierConfig {
        listing_url: args.listing_url,
        base_url: Url::parse(scrapers::asn::BASE_URL)?,
        chat_id: args.chat_id,
    };
    let bot = ChannelBot::new(args.token);
    let notifier = NewsNotifier::new(config, bot);

    // ---- Run the pipeline once ----
    notifier.run().await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
