//! Comment extraction over a whole template.
//!
//! Walks the template with a [`Host`], offering every `{` outside an
//! already-matched comment to the tag scanner. Directive tags and other
//! `{` bytes are stepped over one byte at a time; the first unterminated
//! comment ends the walk with a [`LexError`], since everything after its
//! opening delimiter belongs to it.

use natsu_scanner_core::{SourceBuffer, TagProbe, ValidSymbols};
use tracing::debug;

use crate::{Host, LexError, Token};

/// Iterator over the comment tokens of a template, in source order.
pub struct Comments<'src> {
    host: Host<'src>,
    finished: bool,
}

/// Iterate over the comments in `source`.
pub fn comments(source: &SourceBuffer) -> Comments<'_> {
    Comments {
        host: Host::new(source),
        finished: false,
    }
}

/// Collect every comment token in `source`.
///
/// Fails on the first comment that is never closed.
pub fn lex_comments(source: &str) -> Result<Vec<Token>, LexError> {
    let buffer = SourceBuffer::new(source);
    let tokens = comments(&buffer).collect::<Result<Vec<_>, _>>()?;
    debug!(count = tokens.len(), len = buffer.len(), "lexed comments");
    Ok(tokens)
}

impl Iterator for Comments<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let bytes = self.host.source().as_bytes();
        let mut from = self.host.position() as usize;

        while let Some(offset) = memchr::memchr(b'{', &bytes[from..]) {
            let Ok(at) = u32::try_from(from + offset) else {
                break;
            };
            if self.host.seek(at).is_err() {
                break;
            }
            match self.host.probe(ValidSymbols::COMMENT) {
                TagProbe::Comment(span) => return Some(Ok(Token::comment(span))),
                TagProbe::Unterminated(span) => {
                    self.finished = true;
                    return Some(Err(LexError::UnterminatedComment { span }));
                }
                TagProbe::Directive(keyword) => {
                    debug!(pos = at, keyword = keyword.as_str(), "directive tag");
                    from = at as usize + 1;
                }
                TagProbe::NoDelimiter | TagProbe::NotAcceptable => from = at as usize + 1,
            }
        }

        self.finished = true;
        None
    }
}

impl std::iter::FusedIterator for Comments<'_> {}
