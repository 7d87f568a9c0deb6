/// Failure categories surfaced by the resolver.
///
/// Every kind is terminal for the call: nothing is retried and no default
/// mechanism is substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A coordinate, depth or magnitude required by the regime is absent.
    MissingInput,
    InvalidRegime,
    /// The point lies outside every neotectonic domain.
    DomainNotFound,
    /// The point lies outside both subduction zone boundaries.
    SubductionZoneNotFound,
    /// The depth falls in a bin gap, outside the binned range, or in a bin
    /// with no tabulated mechanisms.
    DepthOutOfRange,
    InvalidModelSelector,
    InvalidSubductionZone,
    /// A file could not be opened or read.
    Io,
    /// A config or data file was readable but malformed.
    Asset,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::MissingInput
            | ErrorKind::InvalidRegime
            | ErrorKind::InvalidModelSelector
            | ErrorKind::InvalidSubductionZone => 2,
            ErrorKind::DomainNotFound
            | ErrorKind::SubductionZoneNotFound
            | ErrorKind::DepthOutOfRange => 3,
            ErrorKind::Io | ErrorKind::Asset => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.kind.exit_code()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_group_by_kind() {
        assert_eq!(AppError::new(ErrorKind::InvalidRegime, "x").exit_code(), 2);
        assert_eq!(AppError::new(ErrorKind::DepthOutOfRange, "x").exit_code(), 3);
        assert_eq!(AppError::new(ErrorKind::Asset, "x").exit_code(), 4);
    }
}
