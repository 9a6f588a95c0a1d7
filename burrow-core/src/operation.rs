use crate::selection::SelectionList;

/// Server actions that read a per-operation selection accumulator.
///
/// Each operation owns exactly one accumulator, one endpoint, and one
/// multipart field name for its files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Extract,
    FindRoi,
    CopySlice,
    TrainPca,
    ApplyPca,
    LearnModel,
    CountFrames,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Extract,
        Operation::FindRoi,
        Operation::CopySlice,
        Operation::TrainPca,
        Operation::ApplyPca,
        Operation::LearnModel,
        Operation::CountFrames,
    ];

    pub fn endpoint(self) -> &'static str {
        match self {
            Operation::Extract => "/extract-raw",
            Operation::FindRoi => "/find-roi",
            Operation::CopySlice => "/copy-slice",
            Operation::TrainPca => "/train-pca",
            Operation::ApplyPca => "/apply-pca",
            Operation::LearnModel => "/learn-model",
            Operation::CountFrames => "/count-frames",
        }
    }

    /// Endpoint with batch / parameter-scan rewiring applied. Only extract
    /// and learn-model have batch counterparts; the flag is ignored
    /// everywhere else.
    pub fn endpoint_for(self, batch: bool) -> &'static str {
        match (self, batch) {
            (Operation::Extract, true) => "/extract-batch",
            (Operation::LearnModel, true) => "/learn-model-parameter-scan",
            _ => self.endpoint(),
        }
    }

    /// Multipart field name the operation's selected files travel under.
    pub fn file_field(self) -> &'static str {
        match self {
            Operation::Extract
            | Operation::FindRoi
            | Operation::CopySlice
            | Operation::CountFrames => "depth-file",
            Operation::TrainPca => "extracted-file",
            Operation::ApplyPca => "pca-file",
            Operation::LearnModel => "scores-file",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Extract => "Extract Raw Data",
            Operation::FindRoi => "Find ROI",
            Operation::CopySlice => "Copy Slice",
            Operation::TrainPca => "Train PCA",
            Operation::ApplyPca => "Apply PCA",
            Operation::LearnModel => "Train ARHMM",
            Operation::CountFrames => "Count Frames",
        }
    }

    /// Button label in batch / parameter-scan mode.
    pub fn batch_label(self) -> &'static str {
        match self {
            Operation::Extract => "Batch Extract",
            Operation::LearnModel => "Train ARHMM + Parameter Scan",
            other => other.label(),
        }
    }

    /// DOM id of the parameter form region the operation reads at submit.
    pub fn params_region(self) -> &'static str {
        match self {
            Operation::Extract => "extract-params",
            Operation::FindRoi => "roi-params",
            Operation::CopySlice => "slice-params",
            Operation::TrainPca => "pca-train-params",
            Operation::ApplyPca => "pca-apply-params",
            Operation::LearnModel => "model-params",
            Operation::CountFrames => "count-params",
        }
    }

    /// Whether a successful reply may carry a `||`-joined file list to
    /// render as a gallery instead of a plain status message.
    pub fn yields_gallery(self) -> bool {
        matches!(
            self,
            Operation::Extract | Operation::FindRoi | Operation::CopySlice | Operation::ApplyPca
        )
    }

    /// (field, path) pairs for the request body, one per selected file.
    pub fn file_pairs<'a>(self, selection: &'a SelectionList) -> Vec<(&'static str, &'a str)> {
        selection
            .paths()
            .map(|path| (self.file_field(), path))
            .collect()
    }
}

/// Endpoints not tied to a selection accumulator.
pub mod endpoints {
    pub const GET_LOCAL_DIR: &str = "/get-local-dir";
    pub const CHECK_LOCAL_DIR: &str = "/check-local-dir";
    pub const GENERATE_CONFIG: &str = "/generate-config";
    pub const GEN_GRIDSEARCH_CONFIG: &str = "/gen-gridsearch-config";
    pub const AGGREGATE_EXTRACT_RESULTS: &str = "/aggregate-extract-results";
    pub const AGGREGATE_MODELING_RESULTS: &str = "/aggregate-modeling-results";
    pub const CLIP_PCA_SCORES: &str = "/clip-pca-scores";
    pub const COMPUTE_CHANGEPOINTS: &str = "/compute-changepoints";
    pub const MAKE_CROWD_MOVIES: &str = "/make-crowd-movies";
    pub const PLOT_SCALAR_SUMMARY: &str = "/plot-scalar-summary";
    pub const PLOT_TRANSITION_GRAPH: &str = "/plot-transition-graph";
    pub const PLOT_USAGES: &str = "/plot-usages";
    pub const GENERATE_VIZ_INDEX: &str = "/generate-viz-index";
    pub const VIZ_ADD_GROUP: &str = "/viz-add-group";
    pub const DOWNLOAD_FLIP_FILE: &str = "/download-flip-file";
    pub const UPLOAD_FILE: &str = "/uploadFile";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_endpoints_are_distinct_per_operation() {
        let set: HashSet<_> = Operation::ALL.iter().map(|op| op.endpoint()).collect();
        assert_eq!(set.len(), Operation::ALL.len());
    }

    #[test]
    fn test_params_regions_are_distinct_per_operation() {
        let set: HashSet<_> = Operation::ALL.iter().map(|op| op.params_region()).collect();
        assert_eq!(set.len(), Operation::ALL.len());
    }

    #[test]
    fn test_batch_rewiring_only_touches_extract_and_learn_model() {
        assert_eq!(Operation::Extract.endpoint_for(true), "/extract-batch");
        assert_eq!(
            Operation::LearnModel.endpoint_for(true),
            "/learn-model-parameter-scan"
        );
        for op in Operation::ALL {
            if !matches!(op, Operation::Extract | Operation::LearnModel) {
                assert_eq!(op.endpoint_for(true), op.endpoint());
            }
            assert_eq!(op.endpoint_for(false), op.endpoint());
        }
    }

    #[test]
    fn test_extract_family_sends_depth_file() {
        for op in [
            Operation::Extract,
            Operation::FindRoi,
            Operation::CopySlice,
            Operation::CountFrames,
        ] {
            assert_eq!(op.file_field(), "depth-file");
        }
    }

    #[test]
    fn test_file_pairs_preserve_exact_paths() {
        let mut selection = SelectionList::new();
        selection.toggle("session1/depth.dat");
        let pairs = Operation::Extract.file_pairs(&selection);
        assert_eq!(pairs, vec![("depth-file", "session1/depth.dat")]);
    }

    #[test]
    fn test_gallery_operations() {
        let with_gallery: Vec<_> = Operation::ALL
            .into_iter()
            .filter(|op| op.yields_gallery())
            .collect();
        assert_eq!(
            with_gallery,
            vec![
                Operation::Extract,
                Operation::FindRoi,
                Operation::CopySlice,
                Operation::ApplyPca
            ]
        );
    }
}
