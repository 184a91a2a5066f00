//! Core type definitions for ReColl
//!
//! These types mirror the resource records stored by the hosted backend and
//! are used throughout the classification and filtering engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Category
// =============================================================================

/// Derived classification of a resource URL.
///
/// Computed on demand from the URL, never stored. Distinct from
/// [`PreviewKind`], which is the coarser two-way split recorded at creation
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// YouTube videos and Instagram reels
    Video,
    /// PDF and Word documents
    Document,
    /// Everything else
    Web,
}

/// Presentation config for a category, as the UI's card grid lays it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryConfig {
    pub icon: &'static str,
    pub label: &'static str,
    pub aspect_ratio: &'static str,
    pub min_height: &'static str,
}

const VIDEO_CONFIG: CategoryConfig = CategoryConfig {
    icon: "\u{1F3A5}",
    label: "Video",
    aspect_ratio: "16/9",
    min_height: "300px",
};

const DOCUMENT_CONFIG: CategoryConfig = CategoryConfig {
    icon: "\u{1F4C4}",
    label: "Document",
    aspect_ratio: "1/1.414",
    min_height: "400px",
};

const WEB_CONFIG: CategoryConfig = CategoryConfig {
    icon: "\u{1F310}",
    label: "Web",
    aspect_ratio: "1/1",
    min_height: "250px",
};

impl Category {
    /// All categories, in the order the filter chip row shows them.
    pub const ALL: [Category; 3] = [Category::Video, Category::Document, Category::Web];

    /// Wire/JSON name of this category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Video => "video",
            Category::Document => "document",
            Category::Web => "web",
        }
    }

    /// Card layout config for this category.
    pub const fn config(&self) -> &'static CategoryConfig {
        match self {
            Category::Video => &VIDEO_CONFIG,
            Category::Document => &DOCUMENT_CONFIG,
            Category::Web => &WEB_CONFIG,
        }
    }

    pub const fn label(&self) -> &'static str {
        self.config().label
    }

    pub const fn icon(&self) -> &'static str {
        self.config().icon
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing a category name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video" => Ok(Category::Video),
            "document" => Ok(Category::Document),
            "web" => Ok(Category::Web),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

// =============================================================================
// Resource Kind
// =============================================================================

/// How a resource was ingested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Uploaded file, `url` points at the stored blob
    File,
    /// Saved web link
    Link,
}

impl ResourceKind {
    /// Parse from the backend's `type` column value.
    pub fn from_str(s: &str) -> Self {
        match s {
            "file" => Self::File,
            _ => Self::Link,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::File => "file",
            ResourceKind::Link => "link",
        }
    }
}

// =============================================================================
// Preview
// =============================================================================

/// Coarse preview split recorded once at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewKind {
    Video,
    Link,
}

impl PreviewKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            PreviewKind::Video => "video",
            PreviewKind::Link => "link",
        }
    }
}

/// Structured preview hint stored alongside a link resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    #[serde(rename = "type")]
    pub kind: PreviewKind,
    pub url: String,
}

impl Preview {
    /// Derive the preview for a URL at creation time.
    ///
    /// YouTube and Vimeo links preview as embedded video, everything else as
    /// a plain link. Never fails.
    pub fn for_url(url: &str) -> Preview {
        let is_video =
            url.contains("youtube.com") || url.contains("youtu.be") || url.contains("vimeo.com");

        Preview {
            kind: if is_video { PreviewKind::Video } else { PreviewKind::Link },
            url: url.to_string(),
        }
    }
}

// =============================================================================
// Resource
// =============================================================================

/// A user-saved resource record, as stored by the hosted backend.
///
/// This crate only reads these: records are created and deleted through the
/// backend's CRUD calls, outside the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Opaque unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Free-form labels, insertion order preserved for display
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Present for links, and for files once the blob is uploaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<Preview>,
}
