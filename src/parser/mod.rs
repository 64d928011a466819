pub mod frontmatter;
pub mod markdown;

pub use frontmatter::{extract_frontmatter, Frontmatter};
pub use markdown::{extract_body, SourceDocument};
