pub mod document;
pub mod span;

pub use document::*;
pub use span::*;
