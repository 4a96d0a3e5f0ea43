//! Video-id extraction from free-form user input.
//!
//! Input is untrusted: a bare 11-character id, any of the YouTube URL
//! shapes, or junk. Extraction is total: every input maps to a `VideoId`
//! or a typed error, never a panic.

use thiserror::Error;
use url::Url;

use crate::video_id::VideoId;

/// Path segments that are followed by a video id.
const MARKER_SEGMENTS: [&str; 4] = ["embed", "shorts", "v", "live"];

/// Errors that can occur during video-id extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Input is neither a bare video id nor an absolute URL.
    #[error("input is neither a video id nor an absolute URL")]
    NotAUrl,

    /// A candidate was found but does not satisfy the id invariant.
    #[error("'{0}' is not a valid 11-character video id")]
    MalformedId(String),

    /// The URL parsed but carries no video id.
    #[error("no video id found in URL")]
    IdNotFound,
}

/// Result type for video-id extraction.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Extract a video id from a bare id or a YouTube URL.
///
/// Accepted shapes, in priority order:
/// - `dQw4w9WgXcQ` (bare id)
/// - `https://youtu.be/VIDEO_ID`
/// - `https://youtube.com/watch?v=VIDEO_ID`
/// - `https://youtube.com/embed/VIDEO_ID`, `/shorts/`, `/v/`, `/live/`
///
/// Query parameters and fragments beyond the id are ignored.
///
/// # Example
/// ```
/// use ytloop_models::extract;
///
/// let id = extract("https://youtu.be/dQw4w9WgXcQ?t=10").unwrap();
/// assert_eq!(id.as_str(), "dQw4w9WgXcQ");
/// ```
pub fn extract(input: &str) -> ExtractResult<VideoId> {
    let trimmed = input.trim();

    // Bare-id shortcut: the user pasted just the id.
    if VideoId::is_valid(trimmed) {
        return VideoId::parse(trimmed);
    }

    let url = Url::parse(trimmed).map_err(|_| ExtractError::NotAUrl)?;

    // youtu.be/<id>: the id is the first non-empty path segment.
    let host = url.host_str().unwrap_or_default();
    if host.contains("youtu.be") {
        return match first_path_segment(&url) {
            Some(segment) => VideoId::parse(segment),
            None => Err(ExtractError::IdNotFound),
        };
    }

    // watch?v=<id> and friends.
    if let Some((_, value)) = url.query_pairs().find(|(key, _)| key == "v") {
        return VideoId::parse(&value);
    }

    // /embed/<id>, /shorts/<id>, /v/<id>, /live/<id>.
    let segments: Vec<&str> = match url.path_segments() {
        Some(iter) => iter.filter(|s| !s.is_empty()).collect(),
        None => Vec::new(),
    };
    if let Some(pos) = segments
        .iter()
        .position(|s| MARKER_SEGMENTS.contains(&s.to_ascii_lowercase().as_str()))
    {
        if let Some(candidate) = segments.get(pos + 1) {
            return VideoId::parse(candidate);
        }
    }

    Err(ExtractError::IdNotFound)
}

fn first_path_segment<'a>(url: &'a Url) -> Option<&'a str> {
    url.path_segments()
        .and_then(|mut segments| segments.find(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_id_round_trip() {
        assert_eq!(extract("dQw4w9WgXcQ").unwrap().as_str(), "dQw4w9WgXcQ");
        assert_eq!(extract("  dQw4w9WgXcQ  ").unwrap().as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract("https://youtube.com/watch?v=dQw4w9WgXcQ").unwrap().as_str(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ&feature=share")
                .unwrap()
                .as_str(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract("https://m.youtube.com/watch?list=PLx&v=dQw4w9WgXcQ")
                .unwrap()
                .as_str(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(
            extract("https://youtu.be/dQw4w9WgXcQ").unwrap().as_str(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract("https://youtu.be/dQw4w9WgXcQ?t=10").unwrap().as_str(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_marker_paths() {
        assert_eq!(
            extract("https://youtube.com/embed/dQw4w9WgXcQ").unwrap().as_str(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract("https://youtube.com/shorts/dQw4w9WgXcQ").unwrap().as_str(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract("https://youtube.com/v/dQw4w9WgXcQ").unwrap().as_str(),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            extract("https://youtube.com/live/dQw4w9WgXcQ").unwrap().as_str(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_not_a_url() {
        assert_eq!(extract("not a url"), Err(ExtractError::NotAUrl));
        assert_eq!(extract(""), Err(ExtractError::NotAUrl));
        // No scheme means no absolute URL.
        assert_eq!(
            extract("youtube.com/watch?v=dQw4w9WgXcQ"),
            Err(ExtractError::NotAUrl)
        );
    }

    #[test]
    fn test_short_url_wrong_length() {
        assert_eq!(
            extract("https://youtu.be/abc12"),
            Err(ExtractError::MalformedId("abc12".to_string()))
        );
    }

    #[test]
    fn test_malformed_candidates() {
        assert!(matches!(
            extract("https://youtube.com/watch?v=abc123"),
            Err(ExtractError::MalformedId(_))
        ));
        assert!(matches!(
            extract("https://youtube.com/watch?v="),
            Err(ExtractError::MalformedId(_))
        ));
        assert!(matches!(
            extract("https://youtube.com/embed/abc123def456789"),
            Err(ExtractError::MalformedId(_))
        ));
    }

    #[test]
    fn test_id_not_found() {
        assert_eq!(
            extract("https://youtube.com"),
            Err(ExtractError::IdNotFound)
        );
        assert_eq!(
            extract("https://youtu.be/"),
            Err(ExtractError::IdNotFound)
        );
        assert_eq!(
            extract("https://youtube.com/playlist?list=PLrAXtmRdnEQy4qtr"),
            Err(ExtractError::IdNotFound)
        );
        assert_eq!(
            extract("https://youtube.com/embed/"),
            Err(ExtractError::IdNotFound)
        );
    }

    #[test]
    fn test_totality_on_junk() {
        for input in [
            "https://",
            "http://?",
            "ftp://example.com/dQw4w9WgXcQ",
            "   ",
            "::::",
            "https://example.com/watch?x=1#frag",
            "dQw4w9WgXc",
        ] {
            // Must return an error, never panic.
            assert!(extract(input).is_err(), "expected error for {input:?}");
        }
    }

    #[test]
    fn test_first_marker_wins() {
        assert_eq!(
            extract("https://youtube.com/embed/dQw4w9WgXcQ/shorts/aaaaaaaaaaa")
                .unwrap()
                .as_str(),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ExtractError::NotAUrl.to_string(),
            "input is neither a video id nor an absolute URL"
        );
        assert_eq!(
            ExtractError::MalformedId("abc".to_string()).to_string(),
            "'abc' is not a valid 11-character video id"
        );
        assert_eq!(
            ExtractError::IdNotFound.to_string(),
            "no video id found in URL"
        );
    }
}
