//! File selection filters
//!
//! Decides, for each candidate file, whether it is emitted, and for each
//! directory, whether the walker enters it.

pub mod content;
pub mod path;
pub mod selection;
pub mod traits;

pub use content::InclusionFilter;
pub use path::{FileTypeFilter, HIDDEN_MARKER, HiddenFilter, IgnoreFilter};
pub use selection::SelectionPredicate;
pub use traits::{DirectoryFilter, Filter, FilterDecision, SkipReason};
