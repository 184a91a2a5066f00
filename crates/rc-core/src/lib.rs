//! ReColl Core Library
//!
//! This crate provides the classification and filtering engine for the ReColl
//! resource collection app. The surrounding UI keeps the user's resource list
//! in memory and re-runs the filter on every keystroke or chip toggle, so the
//! engine is pure, synchronous computation over borrowed data: no network, no
//! persistence, no shared state.
//!
//! Every function here is total. "No match" outcomes are absent values or the
//! [`types::Category::Web`] fallback, never errors; the one fallible boundary
//! is parsing a collection export in [`collection`].
//!
//! # Modules
//!
//! - `classify`: URL category detection and platform id extraction
//! - `collection`: JSON collection exports
//! - `filter`: the resource filter predicate
//! - `types`: shared type definitions
//! - `url`: URL slice helpers

pub mod classify;
pub mod collection;
pub mod filter;
pub mod types;
pub mod url;

// Re-export commonly used items
pub use classify::{classify, extract_instagram_reel_id, extract_youtube_id};
pub use collection::{Collection, CollectionError};
pub use filter::{collect_tags, FilterCriteria};
pub use types::{Category, Preview, PreviewKind, Resource, ResourceKind};
pub use url::{extract_host, favicon_url};
