pub mod block;
pub mod post;
pub mod post_file;
pub mod settings;

pub use block::{Block, BlockId, BlockType};
pub use post::Post;
pub use post_file::PostFile;
pub use settings::*;
