//! # Meet Client
//!
//! HTTP boundary to the remote profile store. Three operations, nothing
//! else: fetch the full roster, fetch one participant's profile payload,
//! and submit an edited payload (gated on timezone validation).
//!
//! ## Example
//!
//! ```no_run
//! use meet_client::MeetClient;
//!
//! #[tokio::main]
//! async fn main() -> meet_client::Result<()> {
//!     let client = MeetClient::from_env()?;
//!     let roster = client.fetch_roster().await?;
//!     println!("{} participants", roster.len());
//!     Ok(())
//! }
//! ```

mod client;
mod error;

pub use client::{MeetClient, DEFAULT_API_URL};
pub use error::{ClientError, Result};
