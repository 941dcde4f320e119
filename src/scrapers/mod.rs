//! Site scrapers for locating and extracting news content.
//!
//! Each scraper module knows one site's markup: which anchor marks the most
//! recent story on the listing page and which elements carry an article's
//! title, lead, and body. Scrapers are pure functions over HTML text; the
//! fetching itself lives with the pipeline in [`crate::notifier`].
//!
//! # Supported Sources
//!
//! | Source | Module | Notes |
//! |--------|--------|-------|
//! | ASN | [`asn`] | Insurance News Agency; listing + article page scraping |

pub mod asn;
