use natsu_scanner_core::{ExternalToken, Span};

/// A token recognized by an external scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: ExternalToken,
    pub span: Span,
}

impl Token {
    /// A comment token covering `span`.
    pub fn comment(span: Span) -> Self {
        Token {
            kind: ExternalToken::Comment,
            span,
        }
    }

    /// The token's text within `source`, or `None` if the span does not
    /// belong to `source`.
    pub fn text(self, source: &str) -> Option<&str> {
        source.get(self.span.to_range())
    }
}
