//! Outgoing transition records.

/// A single outgoing edge of a state: an input symbol and the id of the state
/// it leads to.
///
/// Transitions reference their target by id rather than owning it; the machine
/// owns every state, and the builder guarantees the target id is defined before
/// a machine is assembled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    symbol: String,
    target: String,
}

impl Transition {
    pub(crate) fn new(symbol: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            target: target.into(),
        }
    }

    /// The input symbol this transition consumes.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The id of the state this transition leads to.
    pub fn target(&self) -> &str {
        &self.target
    }
}
