use super::lines::NavLine;
use super::renderer::Renderer;
use crate::util::path::to_slash_string;

/// Space between `Title:` and the file path
const PATH_SEPARATOR: &str = "  ";

/// Renders `nav:` entries for mkdocs.yml:
///
/// ```text
///   - Api:
///       - index:  API/index.md
///       - Token:
///           - ERC20:  API/token/ERC20.md
/// ```
pub struct MkdocsRenderer {
    margin: String,
    indent: usize,
}

impl MkdocsRenderer {
    pub fn new(margin: usize, indent: usize) -> Self {
        Self {
            margin: " ".repeat(margin),
            indent,
        }
    }

    fn prefix(&self, depth: usize) -> String {
        format!("{}{}", self.margin, " ".repeat(self.indent * depth))
    }
}

impl Default for MkdocsRenderer {
    fn default() -> Self {
        Self::new(2, 4)
    }
}

impl Renderer for MkdocsRenderer {
    fn render_line(&self, line: &NavLine<'_>) -> String {
        match line {
            NavLine::Heading { depth, title } => format!("{}- {}:", self.prefix(*depth), title),
            NavLine::Entry { depth, title, path } => format!(
                "{}- {}:{}{}",
                self.prefix(*depth),
                title,
                PATH_SEPARATOR,
                to_slash_string(path)
            ),
        }
    }
}
