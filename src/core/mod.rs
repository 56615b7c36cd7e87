pub mod border;
pub mod headlines;
pub mod overlay;
pub mod pipeline;
pub mod wrap;

pub use crate::core::headlines::HeadlineService;
pub use crate::core::overlay::TextOverlay;
pub use crate::core::pipeline::ImagePipeline;
