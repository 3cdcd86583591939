pub mod engine;
pub mod rel_path;
pub mod spec;

pub use engine::{MatcherEngine, Selection};
pub use rel_path::RelPath;
pub use spec::MatchSpec;
