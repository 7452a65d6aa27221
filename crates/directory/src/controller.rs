use fastrand::Rng;
use meet_client::MeetClient;
use meet_profile::{ProfileRecord, RawProfile};

use crate::display::DisplayEntry;
use crate::error::Result;
use crate::filter::eligible_records;
use crate::index::SearchIndex;
use crate::order::presentation_order;

/// Base URL for contact links when `MEET_CONTACT_BASE` is unset.
pub const DEFAULT_CONTACT_BASE: &str = "https://api.meet.dev";

/// Engine configuration, resolved by the caller before construction.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Base URL contact links point at.
    pub contact_base: String,
    /// Fixed shuffle seed; `None` seeds from entropy.
    pub shuffle_seed: Option<u64>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            contact_base: DEFAULT_CONTACT_BASE.to_string(),
            shuffle_seed: None,
        }
    }
}

/// Lifecycle of a directory, driven by its single roster fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryState {
    /// No snapshot yet; reads serve nothing.
    Loading,
    /// Snapshot in place; reads serve from it.
    Ready,
    /// The fetch failed; reads serve nothing and nothing retries.
    Failed,
}

/// One loaded roster: the eligible records plus the index built over them.
/// Replaced wholesale, never patched.
struct Snapshot {
    records: Vec<ProfileRecord>,
    index: SearchIndex,
}

/// Owns one directory view end to end: the fetch, the eligible snapshot,
/// the live query and the rng behind browsing order.
///
/// The roster is fetched exactly once per controller. To retry a failed
/// fetch, build a new controller; a dropped controller can never apply a
/// late response to a fresher view.
pub struct DirectoryController {
    client: MeetClient,
    config: DirectoryConfig,
    query: String,
    rng: Rng,
    snapshot: Option<Snapshot>,
    failed: bool,
}

impl DirectoryController {
    pub fn new(client: MeetClient, config: DirectoryConfig) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        Self {
            client,
            config,
            query: String::new(),
            rng,
            snapshot: None,
            failed: false,
        }
    }

    pub fn state(&self) -> DirectoryState {
        if self.snapshot.is_some() {
            DirectoryState::Ready
        } else if self.failed {
            DirectoryState::Failed
        } else {
            DirectoryState::Loading
        }
    }

    /// Fetch the roster and build the snapshot.
    ///
    /// Runs at most once: on a controller that is already Ready or Failed
    /// this logs and returns without touching the network. A fetch error
    /// moves the controller to Failed and surfaces as
    /// [`DirectoryError::Fetch`](crate::DirectoryError::Fetch).
    pub async fn load(&mut self) -> Result<()> {
        if self.snapshot.is_some() || self.failed {
            log::debug!("load skipped, directory already {:?}", self.state());
            return Ok(());
        }

        match self.client.fetch_roster().await {
            Ok(roster) => {
                self.ingest(&roster);
                Ok(())
            }
            Err(err) => {
                self.failed = true;
                log::warn!("roster fetch failed: {err}");
                Err(err.into())
            }
        }
    }

    /// Apply a roster directly, bypassing the fetch.
    pub fn ingest(&mut self, roster: &[RawProfile]) {
        let records = eligible_records(roster);
        log::info!(
            "directory ready: {} of {} roster entries eligible",
            records.len(),
            roster.len()
        );
        let index = SearchIndex::build(&records);
        self.snapshot = Some(Snapshot { records, index });
        self.failed = false;
    }

    /// Replace the live query. Cheap; nothing is fetched or rebuilt.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Eligible records in the current snapshot (0 while Loading/Failed).
    pub fn record_count(&self) -> usize {
        self.snapshot.as_ref().map_or(0, |s| s.records.len())
    }

    /// One read of the directory: presentation order resolved against the
    /// live query, then display derivation per record.
    ///
    /// With a blank query every call reshuffles, so consecutive reads
    /// disagree on order. Loading and Failed serve nothing.
    pub fn entries(&mut self) -> Vec<DisplayEntry> {
        let Some(snapshot) = self.snapshot.as_mut() else {
            return Vec::new();
        };

        let order = presentation_order(&mut snapshot.index, &self.query, &mut self.rng);
        order
            .into_iter()
            .map(|idx| DisplayEntry::from_record(&snapshot.records[idx], &self.config.contact_base))
            .collect()
    }
}
