//! Google Books client for bookverse
//!
//! Best-effort cover lookups for single books and the batch volume search
//! used to seed the catalog.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod api_types;
mod client;
mod error;
mod lookup;

pub use api_types::{ImageLinks, Volume, VolumeInfo, VolumesResponse};
pub use client::BooksApiClient;
pub use error::MetadataError;
pub use lookup::CoverLookup;
