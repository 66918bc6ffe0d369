// ⚠️ Errors - one failure path: an identifier nobody recognises

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MappingError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Neither the symbolic name nor any code in the registry matched
    #[error("Invalid {kind} string: {input}")]
    InvalidIdentifier { kind: &'static str, input: String },
}

impl MappingError {
    pub fn invalid(kind: &'static str, input: impl Into<String>) -> Self {
        MappingError::InvalidIdentifier {
            kind,
            input: input.into(),
        }
    }

    /// Registry that rejected the input ("country", "lso" or "terminal")
    pub fn kind(&self) -> &'static str {
        match self {
            MappingError::InvalidIdentifier { kind, .. } => kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_registry_and_input() {
        let err = MappingError::invalid("lso", "not-a-code");
        assert_eq!(err.to_string(), "Invalid lso string: not-a-code");
        assert_eq!(err.kind(), "lso");
    }
}
