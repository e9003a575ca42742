pub mod bootstrap;
pub mod dynamic;
pub mod error;
pub mod merge;
pub mod normalize;
pub mod replace;
pub mod types;

// Re-export commonly used types
pub use error::ClassError;
pub use merge::{add_to, merge_classes};
pub use replace::{replace, replace_classes};
pub use types::{AttributeMap, ClassLookup, ClassValue, ReplacementMap, CLASS_ATTR};
