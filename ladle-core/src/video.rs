//! Embed-URL derivation for recognized video hosts.

use url::Url;

/// Derive an embeddable YouTube URL from a watch-page or short link.
/// Returns `None` for unrecognized hosts or formats; callers fall back to
/// a plain outbound link.
pub fn youtube_embed_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    let video_id = match host {
        "youtube.com" | "m.youtube.com" => url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned()),
        "youtu.be" => url
            .path_segments()
            .and_then(|mut segments| segments.next())
            .map(|s| s.to_string()),
        _ => None,
    }?;

    if video_id.is_empty() {
        return None;
    }
    Some(format!("https://www.youtube.com/embed/{video_id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link() {
        assert_eq!(
            youtube_embed_url("https://youtu.be/AthGc8rDtHc"),
            Some("https://www.youtube.com/embed/AthGc8rDtHc".to_string())
        );
    }

    #[test]
    fn test_short_link_with_tracking_params() {
        assert_eq!(
            youtube_embed_url("https://youtu.be/AthGc8rDtHc?si=dqWUBMjOqGleLDda"),
            Some("https://www.youtube.com/embed/AthGc8rDtHc".to_string())
        );
    }

    #[test]
    fn test_watch_page() {
        assert_eq!(
            youtube_embed_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            youtube_embed_url("https://m.youtube.com/watch?v=dQw4w9WgXcQ&t=42"),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_unrecognized_hosts() {
        assert_eq!(youtube_embed_url("https://vimeo.com/123456"), None);
        assert_eq!(youtube_embed_url("https://example.com/watch?v=abc"), None);
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(youtube_embed_url("not a url"), None);
        assert_eq!(youtube_embed_url(""), None);
        assert_eq!(youtube_embed_url("https://www.youtube.com/watch"), None);
        assert_eq!(youtube_embed_url("https://youtu.be/"), None);
    }
}
