use serde::Deserialize;

/// Substrings marking paths the pipeline writes next to raw data; these are
/// hidden from the raw-file list.
pub const INTERNAL_MARKERS: &[&str] = &["tmp", ".lock", "_pca"];

pub fn is_internal(path: &str) -> bool {
    INTERNAL_MARKERS.iter().any(|marker| path.contains(marker))
}

/// Categorized directory listing as returned by the server. Fetched fresh
/// on each sidebar open and replaced wholesale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DirListing {
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub extracted: Vec<String>,
    #[serde(default)]
    pub pca: Vec<String>,
    #[serde(default)]
    pub models: Vec<String>,
}

impl DirListing {
    /// Raw files with internal pipeline artifacts filtered out.
    pub fn visible_raw(&self) -> Vec<&str> {
        self.files
            .iter()
            .map(String::as_str)
            .filter(|path| !is_internal(path))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
            && self.extracted.is_empty()
            && self.pca.is_empty()
            && self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_markers_are_filtered_from_raw() {
        let listing = DirListing {
            files: vec![
                "session1/depth.dat".into(),
                "session1/tmp/depth.dat".into(),
                "session2/depth.dat.lock".into(),
                "session2/depth_pca.h5".into(),
                "session2/depth.dat".into(),
            ],
            ..Default::default()
        };
        assert_eq!(
            listing.visible_raw(),
            vec!["session1/depth.dat", "session2/depth.dat"]
        );
    }

    #[test]
    fn test_other_categories_are_not_filtered() {
        let listing = DirListing {
            pca: vec!["_pca/pca.h5".into()],
            ..Default::default()
        };
        assert!(listing.visible_raw().is_empty());
        assert_eq!(listing.pca, vec!["_pca/pca.h5".to_string()]);
    }

    #[test]
    fn test_deserializes_with_missing_categories() {
        let listing: DirListing =
            serde_json::from_str(r#"{"files": ["session1/depth.dat"]}"#).unwrap();
        assert_eq!(listing.files.len(), 1);
        assert!(listing.models.is_empty());
        assert!(!listing.is_empty());
    }
}
