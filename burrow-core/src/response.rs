use serde::Deserialize;

use crate::listing::DirListing;

/// The `{ok, message}` envelope most endpoints reply with.
///
/// Some endpoints (learn-model, count-frames) reply with JSON whose fields
/// the client does not use; `ok` is therefore optional and only an explicit
/// `false` is treated as failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct StatusReply {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusReply {
    pub fn is_err(&self) -> bool {
        self.ok == Some(false)
    }

    /// Server message, or `fallback` when the reply carried none.
    pub fn message_or(&self, fallback: &str) -> String {
        match &self.message {
            Some(message) if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Reply shape of the directory-listing endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ListingReply {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub listing: DirListing,
}

/// Reply carrying a `||`-joined list of output paths.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FilesReply {
    #[serde(default)]
    pub files: String,
}

/// Split a `||`-joined path list, dropping empty segments.
pub fn split_file_list(joined: &str) -> Vec<String> {
    joined
        .split("||")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Tile type for a gallery entry, decided by extension.
pub fn media_kind(path: &str) -> MediaKind {
    let ext = path
        .rsplit('.')
        .next()
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "mp4" | "avi" | "webm" | "mov" => MediaKind::Video,
        _ => MediaKind::Image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reply_surfaces_its_message() {
        let reply: StatusReply = serde_json::from_str(r#"{"ok": false, "message": "X"}"#).unwrap();
        assert!(reply.is_err());
        assert_eq!(reply.message_or("fallback"), "X");
    }

    #[test]
    fn test_reply_without_ok_is_not_a_failure() {
        // learn-model / count-frames reply with JSON the client ignores
        let reply: StatusReply = serde_json::from_str(r#"{"iterations": 100}"#).unwrap();
        assert!(!reply.is_err());
        assert_eq!(reply.message_or("done"), "done");
    }

    #[test]
    fn test_empty_message_falls_back() {
        let reply: StatusReply = serde_json::from_str(r#"{"ok": true, "message": ""}"#).unwrap();
        assert_eq!(reply.message_or("done"), "done");
    }

    #[test]
    fn test_listing_reply_flattens_categories() {
        let reply: ListingReply = serde_json::from_str(
            r#"{"ok": true, "files": ["a/depth.dat"], "models": ["model.p"]}"#,
        )
        .unwrap();
        assert!(reply.ok);
        assert_eq!(reply.listing.files, vec!["a/depth.dat".to_string()]);
        assert_eq!(reply.listing.models, vec!["model.p".to_string()]);
    }

    #[test]
    fn test_split_file_list_drops_empty_segments() {
        assert_eq!(
            split_file_list("a/roi.png||b/roi.png"),
            vec!["a/roi.png", "b/roi.png"]
        );
        assert_eq!(split_file_list("a.png||"), vec!["a.png"]);
        assert!(split_file_list("").is_empty());
        assert_eq!(split_file_list(" a.png || b.mp4 "), vec!["a.png", "b.mp4"]);
    }

    #[test]
    fn test_media_kind_by_extension() {
        assert_eq!(media_kind("session1/extraction.mp4"), MediaKind::Video);
        assert_eq!(media_kind("movies/crowd.AVI"), MediaKind::Video);
        assert_eq!(media_kind("session1/roi.png"), MediaKind::Image);
        assert_eq!(media_kind("no-extension"), MediaKind::Image);
    }
}
