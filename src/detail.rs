// src/detail.rs
//! Video embed extraction for the detail page.

use reqwest::Url;
use serde::Serialize;

pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoEmbed {
    pub id: String,
    pub embed_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VideoError {
    #[error("invalid video url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("video url {0:?} has no `v` parameter")]
    MissingId(String),
}

/// Pull the `v` query parameter out of a watch URL.
///
/// `None` / blank input means there is no video and is not an error. Only the
/// query parameter is inspected; the host is not validated.
pub fn video_embed(video_url: Option<&str>) -> Result<Option<VideoEmbed>, VideoError> {
    let raw = match video_url.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    let url = Url::parse(raw).map_err(|e| VideoError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    let id = url
        .query_pairs()
        .find(|(k, _)| k == "v")
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| VideoError::MissingId(raw.to_string()))?;

    Ok(Some(VideoEmbed {
        embed_url: format!("{EMBED_BASE}{id}"),
        id,
    }))
}

/// Like [`video_embed`], but a broken URL only costs the video section.
pub fn video_embed_lenient(video_url: Option<&str>) -> Option<VideoEmbed> {
    match video_embed(video_url) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "dropping video section");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watch_url_yields_embed_id() {
        let v = video_embed(Some("https://example.com/watch?v=abcd1234"))
            .unwrap()
            .unwrap();
        assert_eq!(v.id, "abcd1234");
        assert_eq!(v.embed_url, "https://www.youtube.com/embed/abcd1234");
    }

    #[test]
    fn other_params_do_not_confuse_extraction() {
        let v = video_embed(Some("https://www.youtube.com/watch?t=10&v=4aZr5hZXP_s&list=x"))
            .unwrap()
            .unwrap();
        assert_eq!(v.id, "4aZr5hZXP_s");
    }

    #[test]
    fn absent_or_blank_video_is_not_an_error() {
        assert_eq!(video_embed(None), Ok(None));
        assert_eq!(video_embed(Some("   ")), Ok(None));
    }

    #[test]
    fn malformed_url_fails_only_the_video_field() {
        assert!(matches!(
            video_embed(Some("youtube watch abcd")),
            Err(VideoError::InvalidUrl { .. })
        ));
        assert!(matches!(
            video_embed(Some("https://www.youtube.com/watch")),
            Err(VideoError::MissingId(_))
        ));
        assert_eq!(video_embed_lenient(Some("::::")), None);
    }
}
