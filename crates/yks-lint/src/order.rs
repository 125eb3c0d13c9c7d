use yks_parser::{EventKind, ParseEvent};

use crate::{
    context::{ContextKind, ContextStack},
    LintError, Violation,
};

/// Compares adjacent sibling keys, one event at a time
///
/// Keys are compared by their decoded text, so `10` sorts before `9`. Equal adjacent keys are
/// allowed. Every key becomes the next comparison's predecessor, even one that was reported, so
/// `a, c, b` yields a single violation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderChecker {
    stack: ContextStack,
}

impl OrderChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stack(&self) -> &ContextStack {
        &self.stack
    }

    /// Applies one event, returning a violation if it is a key that sorts before its predecessor
    pub fn check_event(&mut self, event: &ParseEvent) -> Result<Option<Violation>, LintError> {
        let index = self.stack.advance_index()?;
        tracing::trace!(depth = self.stack.depth(), index, kind = ?event.kind, "check event");

        let value = match &event.kind {
            EventKind::SequenceStart => {
                self.stack.enter_sequence();
                return Ok(None);
            }
            EventKind::MappingStart => {
                self.stack.enter_mapping();
                return Ok(None);
            }
            EventKind::SequenceEnd | EventKind::MappingEnd => {
                self.stack.exit()?;
                return Ok(None);
            }
            EventKind::Scalar { value } => value,
            EventKind::StreamStart
            | EventKind::StreamEnd
            | EventKind::DocumentStart
            | EventKind::DocumentEnd
            | EventKind::Alias => return Ok(None),
        };

        let context = self.stack.current()?;
        if context.kind == ContextKind::Unordered || index % 2 == 1 {
            return Ok(None);
        }

        let violation = match context.previous_key.replace(value.clone()) {
            Some(previous_key) if previous_key > *value => Some(Violation {
                position: event.position.clone(),
                key: value.clone(),
                previous_key,
            }),
            _ => None,
        };
        if let Some(violation) = &violation {
            tracing::debug!(
                position = %violation.position,
                key = %violation.key,
                previous_key = %violation.previous_key,
                "key out of order"
            );
        }
        Ok(violation)
    }
}
