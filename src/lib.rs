//! seo-audit: on-page SEO checks for a single URL
//!
//! Fetches one page, parses the HTML, and reports five signals: title
//! length, meta description length, H1 count, word count, and server
//! response time.

pub mod audit;
pub mod fetch;
pub mod page;

pub use audit::{audit, run_audit};
pub use fetch::{fetch_page, FetchError, FetchedPage};
pub use page::PageSignals;
