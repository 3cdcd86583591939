pub mod build;
pub mod node;
pub mod title;

pub use build::{build_nav, BuildOptions};
pub use node::{DirNode, FileEntry};
