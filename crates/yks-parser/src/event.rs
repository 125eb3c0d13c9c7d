use yks_diagnostic::SourcePosition;

/// One unit of the streaming decomposition of a YAML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEvent {
    pub kind: EventKind,
    pub position: SourcePosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    StreamStart,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    SequenceStart,
    SequenceEnd,
    MappingStart,
    MappingEnd,
    /// A scalar node with its decoded value. Quoting style and tags are not kept.
    Scalar {
        value: String,
    },
    /// A `*alias` reference to an anchored node
    Alias,
}
