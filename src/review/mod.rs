//! Gerrit review service client.
//!
//! Lists open changes touching the scanned files, fetches their current
//! patches on a bounded worker pool and turns removed `# needs:` markers
//! into [`ResolutionEvent`](crate::core::ResolutionEvent)s.

pub mod decode;
pub mod diff;
pub mod error;
pub mod fetcher;
pub mod transport;

pub use error::ReviewError;
pub use fetcher::{ReviewBatch, ReviewChange, ReviewFetcher, ReviewQuery};
pub use transport::{HttpTransport, RawResponse, Transport};
