use crate::collector::{CollectionResult, FileRecord};
use crate::error::Result;

use super::Renderer;

pub const FILE_SEPARATOR: &str = "\n---\n\n";

/// Renders each file as `File: ./<path>` followed by a fenced block.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    #[must_use]
    pub fn render_markdown(result: &CollectionResult) -> String {
        let capacity = result
            .files
            .iter()
            .map(|f| f.content.len() + f.relative_path.len() + f.language.len() + 32)
            .sum();
        let mut out = String::with_capacity(capacity);

        for (idx, file) in result.files.iter().enumerate() {
            if idx > 0 {
                out.push_str(FILE_SEPARATOR);
            }
            push_file(&mut out, file);
        }

        out
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, result: &CollectionResult) -> Result<String> {
        Ok(Self::render_markdown(result))
    }
}

fn push_file(out: &mut String, file: &FileRecord) {
    out.push_str("File: ./");
    out.push_str(&file.relative_path);
    out.push_str("\n\n```");
    out.push_str(&file.language);
    out.push('\n');
    out.push_str(&file.content);
    // Newline added for the fence only.
    if !file.content.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n");
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
