//! YouTube link extraction from free-form message text.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::moderation::VideoLink;

static VIDEO_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)https?://(?:www\.)?(?:youtube\.com/(?:watch\?v=|shorts/)|youtu\.be/)([A-Za-z0-9_-]+)",
    )
    .expect("video link pattern is valid")
});

/// Finds the first YouTube video link in `text`.
///
/// Recognizes `youtube.com/watch?v=<id>`, `youtube.com/shorts/<id>` and `youtu.be/<id>` over
/// http or https, with an optional `www.` prefix. Matching is case-insensitive and the video
/// identifier is lowercased so differently cased links to the same video compare equal.
///
/// # Returns
/// - `Some(VideoLink)` - The first recognized link
/// - `None` - No recognized link in the text
pub fn extract_video_id(text: &str) -> Option<VideoLink> {
    let captures = VIDEO_LINK.captures(text)?;
    let url = captures.get(0)?.as_str();
    let video_id = captures.get(1)?.as_str();

    Some(VideoLink {
        video_id: video_id.to_lowercase(),
        url: url.to_string(),
    })
}
