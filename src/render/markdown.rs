//! Markdown renderer.

use crate::model::{file_groups, Function};
use crate::render::{Renderer, GENERATED_BY, TITLE};

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, functions: &[Function]) -> String {
        let mut out = String::new();

        out.push_str(&format!("# {}\n\n", TITLE));
        out.push_str(&format!("{}\n\n", GENERATED_BY));
        out.push_str(&format!("**Total functions:** {}\n\n", functions.len()));

        for group in file_groups(functions) {
            out.push_str(&format!("\n## {}\n\n", group[0].file));
            for func in group {
                out.push_str(&render_function(func));
            }
        }

        out
    }

    fn default_output(&self) -> &str {
        "API.md"
    }
}

/// Heading, optional parameters and description, location, then a rule.
fn render_function(func: &Function) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### `{}`\n", func.name));

    if !func.params.is_empty() {
        lines.push(format!("**Parameters:** `{}`\n", func.params));
    }

    if !func.description.is_empty() {
        lines.push(format!("{}\n", func.description));
    }

    lines.push(format!("*Location:* `{}:{}`\n", func.file, func.line));
    lines.push("---\n".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_reports_zero() {
        assert_eq!(
            MarkdownRenderer.render(&[]),
            "# Project Documentation\n\n\
             Generated automatically by cdocs\n\n\
             **Total functions:** 0\n\n"
        );
    }

    #[test]
    fn full_function_block() {
        let f = Function {
            name: "add".to_string(),
            params: "int a, int b".to_string(),
            description: "Adds two numbers".to_string(),
            file: "./math.c".to_string(),
            line: 2,
        };
        assert_eq!(
            render_function(&f),
            "### `add`\n\n\
             **Parameters:** `int a, int b`\n\n\
             Adds two numbers\n\n\
             *Location:* `./math.c:2`\n\n\
             ---\n\n"
        );
    }

    #[test]
    fn bare_function_block() {
        let f = Function {
            name: "init".to_string(),
            file: "a.c".to_string(),
            line: 9,
            ..Default::default()
        };
        assert_eq!(
            render_function(&f),
            "### `init`\n\n*Location:* `a.c:9`\n\n---\n\n"
        );
    }

    #[test]
    fn file_heading_per_adjacent_group() {
        let mk = |name: &str, file: &str| Function {
            name: name.to_string(),
            file: file.to_string(),
            line: 1,
            ..Default::default()
        };
        let out = MarkdownRenderer.render(&[mk("a", "x.c"), mk("b", "x.c"), mk("c", "y.c"), mk("d", "x.c")]);
        assert_eq!(out.matches("\n## x.c\n\n").count(), 2);
        assert_eq!(out.matches("\n## y.c\n\n").count(), 1);
        assert!(out.contains("**Total functions:** 4\n\n"));
    }
}
