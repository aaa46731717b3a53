//! HTML renderer — standalone page with inline styling.

use crate::model::{file_groups, Function};
use crate::render::{Renderer, GENERATED_BY, TITLE};

pub struct HtmlRenderer;

const STYLE: &str = "\
body { font-family: system-ui; max-width: 900px; margin: 40px auto; padding: 20px; line-height: 1.6; }
h1 { color: #333; border-bottom: 3px solid #0066cc; padding-bottom: 10px; }
h2 { color: #0066cc; margin-top: 30px; }
.function { background: #f5f5f5; padding: 20px; margin: 20px 0; border-left: 4px solid #0066cc; }
.name { font-size: 1.3em; font-weight: bold; color: #333; }
.params { color: #666; margin: 10px 0; font-family: monospace; }
.desc { margin: 10px 0; }
.meta { color: #999; font-size: 0.9em; margin-top: 10px; }
";

impl Renderer for HtmlRenderer {
    fn render(&self, functions: &[Function]) -> String {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset='utf-8'>\n");
        out.push_str(&format!("<title>{}</title>\n", TITLE));
        out.push_str("<style>\n");
        out.push_str(STYLE);
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        out.push_str(&format!("<h1>📚 {}</h1>\n", TITLE));
        out.push_str(&format!("<p>{}</p>\n", GENERATED_BY));
        out.push_str(&format!(
            "<p><strong>Total functions:</strong> {}</p>\n",
            functions.len()
        ));

        for (i, group) in file_groups(functions).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&format!("<h2>📄 {}</h2>\n", html_escape(&group[0].file)));
            for func in group {
                out.push_str(&render_function_html(func));
            }
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    fn default_output(&self) -> &str {
        "docs.html"
    }
}

fn render_function_html(func: &Function) -> String {
    let mut out = String::new();
    out.push_str("<div class='function'>\n");
    out.push_str(&format!("  <div class='name'>{}</div>\n", html_escape(&func.name)));

    if !func.params.is_empty() {
        out.push_str(&format!(
            "  <div class='params'>({})</div>\n",
            html_escape(&func.params)
        ));
    }

    if !func.description.is_empty() {
        out.push_str(&format!(
            "  <div class='desc'>{}</div>\n",
            html_escape(&func.description)
        ));
    }

    out.push_str(&format!(
        "  <div class='meta'>{}:{}</div>\n",
        html_escape(&func.file),
        func.line
    ));
    out.push_str("</div>\n");
    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
