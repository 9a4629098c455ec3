//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the main crawl loop that coordinates all aspects of
//! the crawling process, including:
//! - Opening the visited store
//! - Seeding and draining the frontier
//! - Claiming, fetching and expanding each address
//!
//! One control loop owns the frontier. Each popped item is handled by its own
//! task; the task hands its discovered items back to the loop, which queues
//! them in the order they were found.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, Fetcher};
use crate::crawler::frontier::{Frontier, FrontierItem};
use crate::crawler::gate::ConcurrencyGate;
use crate::crawler::parser::extract_links;
use crate::storage::{SqliteStorage, StorageError, VisitedStore};
use crate::url::{has_http_scheme, normalize_link, origin_of, same_origin};
use crate::Result;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use tracing::Instrument;

/// Totals for a finished crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    /// Frontier items popped and handled during this run
    pub items_handled: u64,

    /// Addresses in the store when the run finished, earlier runs included
    pub visited_total: u64,

    /// Wall-clock duration of the run
    pub elapsed: Duration,
}

/// Everything a single handler task needs; cheap to clone
#[derive(Clone)]
struct PageHandler {
    fetcher: Fetcher,
    storage: Arc<Mutex<SqliteStorage>>,
}

impl PageHandler {
    /// Records the address unless it is already known.
    /// Returns true if this call made the record.
    fn claim(&self, address: &str) -> Result<bool> {
        let mut storage = self.storage.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(storage.mark_if_absent(address)?)
    }

    async fn handle(&self, address: Option<&str>, depth: u32) -> Result<Vec<FrontierItem>> {
        let Some(address) = address.filter(|a| has_http_scheme(a)) else {
            tracing::warn!("Skipping invalid address: {:?}", address);
            return Ok(Vec::new());
        };

        if !self.claim(address)? {
            tracing::info!("Already visited");
            return Ok(Vec::new());
        }

        tracing::info!(depth, "Visiting");
        let content = self.fetcher.fetch(address).await;

        if depth == 0 {
            tracing::debug!("Depth exhausted, not expanding");
            return Ok(Vec::new());
        }

        let Some(origin) = origin_of(address) else {
            tracing::warn!("Could not determine origin, not expanding");
            return Ok(Vec::new());
        };

        let references = extract_links(&content);
        let discovered: Vec<FrontierItem> = references
            .iter()
            .filter_map(|reference| normalize_link(Some(reference), &origin))
            .filter(|link| same_origin(link, &origin))
            .map(|link| FrontierItem::new(link, depth - 1))
            .collect();

        tracing::debug!(
            "Found {} references, {} on {}",
            references.len(),
            discovered.len(),
            origin
        );

        Ok(discovered)
    }
}

/// Main crawler coordinator structure
pub struct Coordinator {
    handler: PageHandler,
    frontier: Frontier,
    workers: usize,
}

impl Coordinator {
    /// Creates a coordinator backed by the database named in the config
    ///
    /// The frontier is seeded with every configured seed at the configured
    /// maximum depth.
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(CrawlError)` - The store could not be opened or the HTTP
    ///   client could not be built
    pub fn new(config: &Config) -> Result<Self> {
        let storage = SqliteStorage::new(Path::new(&config.output.database_path))?;
        Self::with_storage(config, storage)
    }

    /// Creates a coordinator around an already opened store
    pub fn with_storage(config: &Config, storage: SqliteStorage) -> Result<Self> {
        let client = build_http_client(&config.user_agent, &config.crawler)?;
        let gate = ConcurrencyGate::new(config.crawler.max_concurrent_fetches as usize);

        let frontier = Frontier::seeded(config.seeds.iter().cloned(), config.crawler.max_depth);

        Ok(Self {
            handler: PageHandler {
                fetcher: Fetcher::new(client, gate),
                storage: Arc::new(Mutex::new(storage)),
            },
            frontier,
            workers: config.crawler.effective_workers().max(1),
        })
    }

    /// Returns a handle to the visited store
    pub fn storage(&self) -> Arc<Mutex<SqliteStorage>> {
        Arc::clone(&self.handler.storage)
    }

    /// Returns the gate bounding this crawl's fetches
    pub fn gate(&self) -> &ConcurrencyGate {
        self.handler.fetcher.gate()
    }

    /// Number of items still waiting in the frontier
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Adds an item to the back of the frontier
    pub fn enqueue(&mut self, address: impl Into<String>, depth: u32) {
        self.frontier.push(address, depth);
    }

    /// Handles a single frontier item
    ///
    /// 1. Drops missing or non-http(s) addresses
    /// 2. Claims the address in the visited store; stops if it was
    ///    already there
    /// 3. Fetches the page (empty content on failure)
    /// 4. Stops at depth 0
    /// 5. Extracts references, resolves them against the address's origin
    ///    and keeps the ones on that same origin
    ///
    /// Returns the discovered items, one level shallower than `depth`. Only
    /// storage failures are returned as errors.
    pub async fn handle(&self, address: Option<&str>, depth: u32) -> Result<Vec<FrontierItem>> {
        let span = tracing::info_span!("page", url = address.unwrap_or("<none>"));
        self.handler.handle(address, depth).instrument(span).await
    }

    /// Runs the main crawl loop until the frontier is drained
    ///
    /// Up to `workers` items are handled concurrently. The loop finishes
    /// once the frontier is empty and no handler is still running.
    pub async fn run(&mut self) -> Result<CrawlSummary> {
        tracing::info!(
            "Starting crawl: {} seeds, {} workers, gate capacity {}",
            self.frontier.len(),
            self.workers,
            self.gate().capacity()
        );

        let start_time = Instant::now();
        let mut items_handled: u64 = 0;
        let mut tasks: JoinSet<Result<Vec<FrontierItem>>> = JoinSet::new();

        loop {
            while tasks.len() < self.workers {
                let Some(item) = self.frontier.pop() else {
                    break;
                };

                let handler = self.handler.clone();
                let span = tracing::info_span!("page", url = %item.address);
                tasks.spawn(
                    async move { handler.handle(Some(&item.address), item.depth).await }
                        .instrument(span),
                );
            }

            let Some(joined) = tasks.join_next().await else {
                break;
            };

            let discovered = joined??;
            self.frontier.extend(discovered);
            items_handled += 1;

            if items_handled % 10 == 0 {
                tracing::info!(
                    "Progress: {} items handled, {} in frontier, {} in flight",
                    items_handled,
                    self.frontier.len(),
                    tasks.len()
                );
            }
        }

        let visited_total = {
            let storage = self
                .handler
                .storage
                .lock()
                .map_err(|_| StorageError::LockPoisoned)?;
            storage.count_visited()?
        };

        let summary = CrawlSummary {
            items_handled,
            visited_total,
            elapsed: start_time.elapsed(),
        };

        tracing::info!(
            "Crawl completed: {} items handled, {} addresses in store, took {:?}",
            summary.items_handled,
            summary.visited_total,
            summary.elapsed
        );

        Ok(summary)
    }
}

/// Runs a complete crawl for the given configuration
///
/// # Example
///
/// ```no_run
/// use homebound::config::load_config;
/// use homebound::crawler::run_crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("homebound.toml"))?;
/// let summary = run_crawl(&config).await?;
/// println!("{} addresses visited", summary.visited_total);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: &Config) -> Result<CrawlSummary> {
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
