use crate::LintError;

/// Whether keys are ordered at a nesting level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    /// A sequence, or the implicit outermost level. Nothing is compared.
    Unordered,
    /// A mapping. Events alternate between keys at even indices and values at odd indices.
    KeyValue,
}

/// Ordering state of one open nesting level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Number of events seen directly within this level
    pub index: usize,
    pub kind: ContextKind,
    /// The most recent key at this level
    pub previous_key: Option<String>,
}

impl Context {
    pub const fn new(kind: ContextKind) -> Self {
        Self {
            index: 0,
            kind,
            previous_key: None,
        }
    }

    /// Bumps the index and returns its previous value
    pub fn advance_index(&mut self) -> usize {
        let index = self.index;
        self.index += 1;
        index
    }
}

/// The open nesting levels, outermost first
///
/// The bottom frame is the implicit outermost context, which holds the top-level nodes of every
/// document in the stream and is never popped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextStack {
    frames: Vec<Context>,
}

impl Default for ContextStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextStack {
    pub fn new() -> Self {
        Self {
            frames: vec![Context::new(ContextKind::Unordered)],
        }
    }

    /// Number of open sequences and mappings
    pub fn depth(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    pub fn enter_sequence(&mut self) {
        self.push(ContextKind::Unordered);
    }

    pub fn enter_mapping(&mut self) {
        self.push(ContextKind::KeyValue);
    }

    fn push(&mut self, kind: ContextKind) {
        self.frames.push(Context::new(kind));
        tracing::trace!(depth = self.depth(), ?kind, "enter context");
    }

    /// Discards the innermost context, restoring its parent as it was before the child was entered
    pub fn exit(&mut self) -> Result<(), LintError> {
        if self.frames.len() <= 1 {
            return Err(LintError::StackUnderflow);
        }
        let context = self.frames.pop();
        tracing::trace!(depth = self.depth(), ?context, "exit context");
        Ok(())
    }

    pub fn current(&mut self) -> Result<&mut Context, LintError> {
        self.frames.last_mut().ok_or(LintError::StackUnderflow)
    }

    /// Bumps the innermost context's index and returns its previous value
    pub fn advance_index(&mut self) -> Result<usize, LintError> {
        Ok(self.current()?.advance_index())
    }
}
