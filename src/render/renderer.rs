use super::lines::{NavLine, NavLines};
use crate::nav::DirNode;
use std::io::{self, Write};

/// Formats outline lines for one output format
pub trait Renderer {
    /// Format a single line, without the trailing newline
    fn render_line(&self, line: &NavLine<'_>) -> String;

    /// Lazily format every line of the tree
    fn lines<'a>(&'a self, root: &'a DirNode) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(NavLines::new(root).map(move |line| self.render_line(&line)))
    }

    /// Write the outline, one line at a time
    fn write_tree(&self, root: &DirNode, out: &mut dyn Write) -> io::Result<()> {
        for line in self.lines(root) {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }

    /// Render the whole outline into a string
    #[cfg(test)]
    fn render_tree(&self, root: &DirNode) -> String {
        let mut output = String::new();
        for line in self.lines(root) {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }
}
