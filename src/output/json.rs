use serde::Serialize;

use crate::collector::{CollectionResult, FileRecord};
use crate::error::Result;

use super::Renderer;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    files: &'a [FileRecord],
}

#[derive(Serialize)]
struct Summary {
    file_count: usize,
    total_bytes: u64,
}

impl Renderer for JsonRenderer {
    fn render(&self, result: &CollectionResult) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                file_count: result.file_count,
                total_bytes: result.total_size,
            },
            files: &result.files,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
