use super::lines::NavLine;
use super::renderer::Renderer;
use crate::util::path::to_slash_string;

/// Pure Markdown renderer: directories as plain bullets, files as links
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Percent-encode the characters that break a Markdown link target
    fn link_target(path: &str) -> String {
        path.replace('%', "%25")
            .replace(' ', "%20")
            .replace('(', "%28")
            .replace(')', "%29")
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MarkdownRenderer {
    fn render_line(&self, line: &NavLine<'_>) -> String {
        let indent_str = "  ".repeat(line.depth());
        match line {
            NavLine::Heading { title, .. } => format!("{}- {}", indent_str, title),
            NavLine::Entry { title, path, .. } => format!(
                "{}- [{}]({})",
                indent_str,
                title,
                Self::link_target(&to_slash_string(path))
            ),
        }
    }
}
