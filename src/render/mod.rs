//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod markdown;

use crate::error::RenderError;
use crate::model::Function;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Document title shared by every format.
pub const TITLE: &str = "Project Documentation";

/// Byline shared by every format.
pub const GENERATED_BY: &str = "Generated automatically by cdocs";

/// Trait for rendering the collected functions into one output document.
pub trait Renderer {
    fn render(&self, functions: &[Function]) -> String;
    /// Output path used when none is given on the command line.
    fn default_output(&self) -> &str;
}

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Html,
    Markdown,
}

/// Create a renderer for the given format.
pub fn create_renderer(format: Format) -> Box<dyn Renderer> {
    match format {
        Format::Html => Box::new(html::HtmlRenderer),
        Format::Markdown => Box::new(markdown::MarkdownRenderer),
    }
}

/// Render `functions` and write the document to `path`.
pub fn write_document(
    renderer: &dyn Renderer,
    functions: &[Function],
    path: &Path,
) -> Result<(), RenderError> {
    let mut file = File::create(path).map_err(|source| RenderError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(renderer.render(functions).as_bytes())
        .map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample() -> Vec<Function> {
        vec![
            Function {
                name: "add".to_string(),
                params: "int a, int b".to_string(),
                description: "Adds two numbers".to_string(),
                file: "./math.c".to_string(),
                line: 2,
            },
            Function {
                name: "main".to_string(),
                params: "void".to_string(),
                description: String::new(),
                file: "./main.c".to_string(),
                line: 7,
            },
        ]
    }

    #[test]
    fn default_outputs_differ() {
        assert_eq!(create_renderer(Format::Html).default_output(), "docs.html");
        assert_eq!(create_renderer(Format::Markdown).default_output(), "API.md");
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let funcs = sample();
        for format in [Format::Html, Format::Markdown] {
            let renderer = create_renderer(format);
            let first = dir.path().join("first");
            let second = dir.path().join("second");
            write_document(renderer.as_ref(), &funcs, &first).unwrap();
            write_document(renderer.as_ref(), &funcs, &second).unwrap();
            assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
        }
    }

    #[test]
    fn uncreatable_destination_is_a_create_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.html");
        let renderer = create_renderer(Format::Html);
        let err = write_document(renderer.as_ref(), &sample(), &path).unwrap_err();
        assert!(matches!(err, RenderError::Create { .. }));
        assert!(err.to_string().starts_with("could not create"));
    }
}
