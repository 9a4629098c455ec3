//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching under a concurrency gate
//! - HTML parsing and link extraction
//! - The breadth-first frontier
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod gate;
mod parser;

pub use coordinator::{run_crawl, Coordinator, CrawlSummary};
pub use fetcher::{build_http_client, fetch_url, FetchResult, Fetcher};
pub use frontier::{Frontier, FrontierItem};
pub use gate::{ConcurrencyGate, GatePermit, DEFAULT_GATE_CAPACITY};
pub use parser::extract_links;
