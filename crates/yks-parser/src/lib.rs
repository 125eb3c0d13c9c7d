//! # YAML event source
//!
//! Pulls the low-level event stream out of a YAML document, one event at a time and without
//! building a document tree, and attaches an accurate [`SourcePosition`] to every event.
//!
//! Malformed YAML is reported as a [`ParseError`]. Consumers of [`Events`] can assume the events
//! they see are well-formed: every start event is matched by its end event, and mapping keys
//! always precede their values.

use line_index::LineIndex;
use saphyr_parser::{Event, Parser, ScanError, Span};
use thiserror::Error;
use yks_diagnostic::SourcePosition;

pub use event::{EventKind, ParseEvent};
pub use yks_diagnostic::SourceId;

mod event;
mod line_index;

/// Parses `text` lazily, naming positions after `source`
pub fn parse(text: &str, source: SourceId) -> Events<'_> {
    Events {
        inner: Box::new(Parser::new_from_str(text)),
        index: LineIndex::new(text),
        source,
        failed: false,
    }
}

/// Iterator over the [`ParseEvent`]s of one YAML stream
///
/// Fused after the first [`ParseError`].
pub struct Events<'input> {
    inner: Box<dyn Iterator<Item = Result<(Event<'input>, Span), ScanError>> + 'input>,
    index: LineIndex,
    source: SourceId,
    failed: bool,
}

impl Events<'_> {
    fn source_position(&self, start: usize, end: usize) -> SourcePosition {
        let (line, column) = self.index.line_col(start);
        SourcePosition {
            source: self.source.clone(),
            line,
            column,
            range: self.index.byte_range(start, end),
        }
    }
}

impl Iterator for Events<'_> {
    type Item = Result<ParseEvent, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let (event, span) = match self.inner.next()? {
                Ok(next) => next,
                Err(err) => {
                    self.failed = true;
                    let offset = err.marker().index();
                    return Some(Err(ParseError {
                        message: err.info().to_owned(),
                        position: self.source_position(offset, offset),
                    }));
                }
            };
            let kind = match event {
                Event::StreamStart => EventKind::StreamStart,
                Event::StreamEnd => EventKind::StreamEnd,
                Event::DocumentStart(..) => EventKind::DocumentStart,
                Event::DocumentEnd => EventKind::DocumentEnd,
                Event::SequenceStart(..) => EventKind::SequenceStart,
                Event::SequenceEnd => EventKind::SequenceEnd,
                Event::MappingStart(..) => EventKind::MappingStart,
                Event::MappingEnd => EventKind::MappingEnd,
                Event::Alias(..) => EventKind::Alias,
                Event::Scalar(value, ..) => EventKind::Scalar {
                    value: value.into(),
                },
                // `Nothing` is internal to the parser and never reaches consumers
                _ => continue,
            };
            let position = self.source_position(span.start.index(), span.end.index());
            tracing::trace!(?kind, %position, "event");
            return Some(Ok(ParseEvent { kind, position }));
        }
    }
}

/// A YAML syntax error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{position}: {message}")]
pub struct ParseError {
    pub message: String,
    pub position: SourcePosition,
}
