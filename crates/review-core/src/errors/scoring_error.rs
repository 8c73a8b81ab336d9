use thiserror::Error;

/// Failures raised by the scoring engine.
///
/// All of them are immediate and synchronous; retrying a pure computation
/// never helps. Callers decide whether a [`ScoringError::DataIntegrity`]
/// rejects one record or aborts the whole batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    /// A record violates one of its invariants.
    #[error("data integrity violation in `{field}`: {reason}")]
    DataIntegrity { field: &'static str, reason: String },

    /// An aggregate was requested over zero records.
    #[error("{operation} requires at least one review")]
    EmptyInput { operation: &'static str },

    /// The Wilson bound left [0, 1] by more than the rounding tolerance.
    #[error("wilson lower bound {value} fell outside [0, 1]")]
    NumericDomain { value: f64 },

    #[error("confidence must lie strictly between 0 and 1, got {confidence}")]
    InvalidConfidence { confidence: f64 },

    /// A record-level failure tagged with the record's input position.
    #[error("record {index} rejected: {source}")]
    RecordRejected {
        index: usize,
        #[source]
        source: Box<ScoringError>,
    },
}

impl ScoringError {
    pub fn integrity(field: &'static str, reason: impl Into<String>) -> Self {
        Self::DataIntegrity {
            field,
            reason: reason.into(),
        }
    }

    /// Attach the input index of the offending record.
    pub fn at_record(self, index: usize) -> Self {
        Self::RecordRejected {
            index,
            source: Box::new(self),
        }
    }

    /// The underlying error with any record tagging removed.
    pub fn root(&self) -> &ScoringError {
        match self {
            Self::RecordRejected { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_data_integrity(&self) -> bool {
        matches!(self.root(), Self::DataIntegrity { .. })
    }
}
