//! Scene composition: anachronism guards and image prompts.

pub mod compose;
pub mod exclusions;
pub mod prompt;

pub use compose::{compose_scene, geological_period_for, Scene, SceneReport};
pub use exclusions::historical_exclusions;
pub use prompt::{generate_image_prompt, ViewAnalysis};
