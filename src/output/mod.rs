mod json;
mod markdown;
mod progress;

pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use progress::CollectBar;

use crate::collector::CollectionResult;
use crate::error::Result;

/// Trait for rendering a collection into a single document.
pub trait Renderer {
    /// Render the collection. Must not touch the filesystem.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn render(&self, result: &CollectionResult) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            Self::Markdown => Box::new(MarkdownRenderer),
            Self::Json => Box::new(JsonRenderer),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
