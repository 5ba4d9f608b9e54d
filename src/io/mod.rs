//! File system access: discovering, reading and persisting posts

pub mod discover;
pub mod reader;
pub mod writer;

pub use discover::{discover_posts, has_suffix};
pub use reader::read_post;
pub use writer::{PostWriter, WriteResult, WriterConfig};
