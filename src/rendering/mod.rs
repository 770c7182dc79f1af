pub mod camera;
pub mod context;
pub mod pipeline;

// Re-export main types
pub use camera::Camera;
#[cfg(feature = "software")]
pub use context::ImageScreen;
pub use context::{DrawCommand, RenderContext};
pub use pipeline::RenderList;
