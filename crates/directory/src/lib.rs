//! # Meet Directory
//!
//! The teammate-finding engine: turns a raw roster into a searchable,
//! display-ready directory.
//!
//! ## Pipeline
//!
//! ```text
//! raw roster (one fetch per view)
//!     │
//!     ├──> Eligibility filter (opted-in entries only)
//!     │      └─> ProfileRecord sequence
//!     │
//!     ├──> SearchIndex::build (idea / verticals / first name)
//!     │      └─> frozen fuzzy index, one per snapshot
//!     │
//!     └──> per read:
//!            ├─> query empty    → fresh randomized order
//!            ├─> query nonempty → fuzzy-ranked matches
//!            └─> display derivation (name casing, tag colors, contact link)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use meet_client::MeetClient;
//! use meet_directory::{DirectoryConfig, DirectoryController};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = MeetClient::from_env()?;
//!     let mut directory = DirectoryController::new(client, DirectoryConfig::default());
//!     directory.load().await?;
//!
//!     directory.set_query("rust");
//!     for entry in directory.entries() {
//!         println!("{}: {}", entry.display_name, entry.contact_url);
//!     }
//!     Ok(())
//! }
//! ```

mod controller;
mod display;
mod error;
mod filter;
mod index;
mod order;

pub use controller::{DirectoryConfig, DirectoryController, DirectoryState, DEFAULT_CONTACT_BASE};
pub use display::{
    color_bucket, contact_url, display_name, tag_color, DisplayEntry, TagBadge, COLOR_PALETTE,
};
pub use error::{DirectoryError, Result};
pub use filter::eligible_records;
pub use index::SearchIndex;
pub use order::{presentation_order, shuffled_order, Presentation};
