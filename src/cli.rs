//! Command-line interface definitions for the news bot.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Credentials are normally supplied through the environment; flags exist for
//! ad-hoc runs and testing.

use crate::scrapers::asn;
use clap::Parser;

/// Command-line arguments for one notifier run.
///
/// The token and chat id default to empty strings rather than being required:
/// a missing credential is not a CLI error, it surfaces later as a rejected
/// Bot API call.
///
/// # Examples
///
/// ```sh
/// # Credentials from the environment
/// TOKEN=123456:abcdef CHAT_ID=@my_channel asn_news_bot
///
/// # Checking a different listing page
/// asn_news_bot --listing-url https://www.asn-news.ru/news
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Bot authentication token
    #[arg(long, env = "TOKEN", default_value = "", hide_default_value = true)]
    pub token: String,

    /// Destination chat or channel identifier
    #[arg(long, env = "CHAT_ID", default_value = "", hide_default_value = true)]
    pub chat_id: String,

    /// News listing page to check for the latest article
    #[arg(long, default_value = asn::LISTING_URL)]
    pub listing_url: String,
}
