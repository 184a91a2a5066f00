//! URL category detection and platform id extraction
//!
//! Classification is syntactic only: no network access, and every input maps
//! to a category. Malformed URLs degrade to [`Category::Web`] rather than
//! failing.

use crate::types::Category;

/// Extensions that classify as documents. The match is case-sensitive and
/// anchored at the end of the URL, so `a.PDF` stays [`Category::Web`].
const DOCUMENT_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx"];

/// Map a resource URL to its category. First match wins:
/// video hosts, then document extensions, then the web fallback.
pub fn classify(url: &str) -> Category {
    if is_video_url(url) {
        return Category::Video;
    }

    if DOCUMENT_EXTENSIONS.iter().any(|ext| url.ends_with(ext)) {
        return Category::Document;
    }

    Category::Web
}

/// YouTube in either host form, or an Instagram reel path.
#[inline]
fn is_video_url(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be") || url.contains("instagram.com/reel")
}

/// Extract the video id from a YouTube URL.
///
/// Matches `youtube.com/watch?v=<id>` or `youtu.be/<id>`, capturing up to the
/// next `&` or whitespace. Returns `None` when the URL matches neither form.
pub fn extract_youtube_id(url: &str) -> Option<&str> {
    let rest = slice_after(url, "youtube.com/watch?v=").or_else(|| slice_after(url, "youtu.be/"))?;

    let end = rest
        .find(|c: char| c == '&' || c.is_ascii_whitespace())
        .unwrap_or(rest.len());

    if end == 0 {
        return None;
    }
    Some(&rest[..end])
}

/// Extract the reel id from an Instagram URL.
///
/// Matches `instagram.com/reel/<id>`, capturing up to the next `/` or `?`.
pub fn extract_instagram_reel_id(url: &str) -> Option<&str> {
    let rest = slice_after(url, "instagram.com/reel/")?;

    let end = rest
        .find(|c: char| c == '/' || c == '?')
        .unwrap_or(rest.len());

    if end == 0 {
        return None;
    }
    Some(&rest[..end])
}

/// The slice following the first occurrence of `pattern`.
#[inline]
fn slice_after<'a>(url: &'a str, pattern: &str) -> Option<&'a str> {
    url.find(pattern).map(|pos| &url[pos + pattern.len()..])
}
