//! Link analysis for submitted video inputs.
//!
//! Where [`crate::extract`] answers "which video?", this module answers
//! "what did the user paste and what should the widget do with it": the
//! matched link form, the canonical watch URL, and the embed URL the
//! iframe is created from.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::extract::{extract, ExtractResult};
use crate::video_id::VideoId;

/// Which accepted input shape a submission matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkForm {
    /// Bare 11-character id, no URL around it
    BareId,
    /// youtu.be short link
    Short,
    /// Standard watch URL with a `v` parameter
    Watch,
    /// Embed player URL
    Embed,
    /// YouTube Shorts URL
    Shorts,
    /// Live-tab URL
    Live,
    /// Legacy `/v/` URL
    Legacy,
}

impl fmt::Display for LinkForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkForm::BareId => "bare_id",
            LinkForm::Short => "short",
            LinkForm::Watch => "watch",
            LinkForm::Embed => "embed",
            LinkForm::Shorts => "shorts",
            LinkForm::Live => "live",
            LinkForm::Legacy => "legacy",
        };
        write!(f, "{}", name)
    }
}

/// Analysis result for one submitted URL or id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoLink {
    /// Extracted 11-character video id
    pub video_id: VideoId,

    /// Classification of the input shape
    pub form: LinkForm,

    /// Normalized canonical watch URL
    pub watch_url: String,

    /// Embed URL the player iframe is created from
    pub embed_url: String,
}

impl VideoLink {
    /// Analyze a raw submission.
    ///
    /// Extraction failures pass through untouched so the widget can show
    /// the parse message as-is.
    pub fn analyze(input: &str) -> ExtractResult<Self> {
        let trimmed = input.trim();
        let video_id = extract(trimmed)?;
        let form = classify(trimmed);
        let watch_url = watch_url(&video_id);
        let embed_url = embed_url(&video_id);
        Ok(Self {
            video_id,
            form,
            watch_url,
            embed_url,
        })
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Canonical watch URL for a video.
pub fn watch_url(id: &VideoId) -> String {
    format!("https://www.youtube.com/watch?v={}", id)
}

/// Embed URL carrying the player parameters the widget relies on:
/// muted autoplay (so the browser allows it) and the JS API bridge.
pub fn embed_url(id: &VideoId) -> String {
    format!(
        "https://www.youtube.com/embed/{}?autoplay=1&mute=1&enablejsapi=1&playsinline=1",
        id
    )
}

/// Classify an input that already yielded a valid id.
fn classify(input: &str) -> LinkForm {
    if VideoId::is_valid(input) {
        return LinkForm::BareId;
    }
    let lower = input.to_ascii_lowercase();
    if lower.contains("youtu.be/") {
        LinkForm::Short
    } else if lower.contains("/shorts/") {
        LinkForm::Shorts
    } else if lower.contains("/embed/") {
        LinkForm::Embed
    } else if lower.contains("/live/") {
        LinkForm::Live
    } else if lower.contains("/v/") {
        LinkForm::Legacy
    } else {
        LinkForm::Watch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ExtractError;

    #[test]
    fn test_analyze_watch_url() {
        let link = VideoLink::analyze("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(link.video_id.as_str(), "dQw4w9WgXcQ");
        assert_eq!(link.form, LinkForm::Watch);
        assert_eq!(
            link.watch_url,
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
        assert!(link
            .embed_url
            .starts_with("https://www.youtube.com/embed/dQw4w9WgXcQ?"));
        assert!(link.embed_url.contains("autoplay=1"));
        assert!(link.embed_url.contains("mute=1"));
        assert!(link.embed_url.contains("enablejsapi=1"));
    }

    #[test]
    fn test_analyze_normalizes_noisy_urls() {
        let link =
            VideoLink::analyze("https://youtu.be/dQw4w9WgXcQ?t=30&feature=share").unwrap();
        assert_eq!(link.form, LinkForm::Short);
        assert_eq!(
            link.watch_url,
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_analyze_classification() {
        let cases = [
            ("dQw4w9WgXcQ", LinkForm::BareId),
            ("https://youtu.be/dQw4w9WgXcQ", LinkForm::Short),
            ("https://youtube.com/watch?v=dQw4w9WgXcQ", LinkForm::Watch),
            ("https://youtube.com/embed/dQw4w9WgXcQ", LinkForm::Embed),
            ("https://youtube.com/shorts/dQw4w9WgXcQ", LinkForm::Shorts),
            ("https://youtube.com/live/dQw4w9WgXcQ", LinkForm::Live),
            ("https://youtube.com/v/dQw4w9WgXcQ", LinkForm::Legacy),
        ];
        for (input, form) in cases {
            assert_eq!(VideoLink::analyze(input).unwrap().form, form, "{input}");
        }
    }

    #[test]
    fn test_analyze_propagates_extract_errors() {
        assert_eq!(
            VideoLink::analyze("not a url").unwrap_err(),
            ExtractError::NotAUrl
        );
        assert!(matches!(
            VideoLink::analyze("https://youtu.be/abc12"),
            Err(ExtractError::MalformedId(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let link = VideoLink::analyze("https://youtube.com/shorts/dQw4w9WgXcQ").unwrap();
        let json = link.to_json().unwrap();
        assert!(json.contains(r#""form":"shorts""#));
        let back: VideoLink = serde_json::from_str(&json).unwrap();
        assert_eq!(back.video_id, link.video_id);
        assert_eq!(back.form, LinkForm::Shorts);
    }
}
