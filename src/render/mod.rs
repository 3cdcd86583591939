pub mod lines;
pub mod markdown;
pub mod mkdocs;
pub mod renderer;

pub use markdown::MarkdownRenderer;
pub use mkdocs::MkdocsRenderer;
pub use renderer::Renderer;

use crate::cli::OutputMode;
use crate::config::Settings;

/// Create the renderer selected by the resolved settings
pub fn create_renderer(settings: &Settings) -> Box<dyn Renderer> {
    match settings.output {
        OutputMode::Mkdocs => Box::new(MkdocsRenderer::new(settings.margin, settings.indent)),
        OutputMode::Markdown => Box::new(MarkdownRenderer::new()),
    }
}
