pub mod openrouter;

pub use openrouter::{parse_view_content, GeneratedImage, OpenRouterClient};
