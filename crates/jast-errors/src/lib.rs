//! Syntax diagnostics and their rendering.

use std::fmt::Display;

pub use annotate_snippets::Renderer;
use annotate_snippets::{Level, Snippet};
pub use text_size::TextRange;

/// A message attached to a source range.
#[salsa::accumulator]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
    range: TextRange,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, range: TextRange) -> Self {
        Self { message: message.into(), range }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn render<'a>(
        &'a self,
        renderer: &'a Renderer,
        path: &'a str,
        text: &'a str,
    ) -> impl Display + 'a {
        let message = Level::Error.title(&self.message).snippet(
            Snippet::source(text)
                .origin(path)
                .annotation(Level::Error.span(self.range.into()).label("here"))
                .fold(true),
        );
        renderer.render(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_points_at_range() {
        let text = "class A { int x }\n";
        let diagnostic = Diagnostic::error("expected ';'", TextRange::new(15.into(), 16.into()));
        let rendered = diagnostic.render(&Renderer::plain(), "A.java", text).to_string();

        assert!(rendered.contains("error: expected ';'"), "{rendered}");
        assert!(rendered.contains("A.java"), "{rendered}");
        assert!(rendered.contains("here"), "{rendered}");
    }
}
