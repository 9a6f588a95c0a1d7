//! DOM-free core for the burrow front end: the operation catalog, selection
//! accumulators, multi-value form serialization, directory listings, and
//! server reply envelopes. Everything here runs and tests natively.

pub mod form;
pub mod listing;
pub mod operation;
pub mod response;
pub mod selection;

pub use form::FormValues;
pub use listing::DirListing;
pub use operation::{endpoints, Operation};
pub use response::{media_kind, split_file_list, FilesReply, ListingReply, MediaKind, StatusReply};
pub use selection::{sanitize_id, SelectedFile, SelectionList, Toggle};
