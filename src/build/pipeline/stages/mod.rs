//! Default pipeline stages.
//!
//! Static HTML site:
//!
//! 1. **PagesStage** - Render the top-level pages
//! 2. **PostsStage** - Render one page per post
//! 3. **WriteStage** - Write rendered files to the output directory
//! 4. **AssetsStage** - Copy images and stylesheets (finalize)
//!
//! The Jekyll tree swaps the first two for the `jekyll-*` stages.

mod assets;
mod jekyll;
mod pages;
mod write;

pub use assets::AssetsStage;
pub use jekyll::{JekyllConfigStage, JekyllPostsStage, JekyllScaffoldStage};
pub use pages::{PagesStage, PostsStage};
pub use write::WriteStage;
