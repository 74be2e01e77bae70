use anchor_lang::prelude::*;

/// Every way a voting instruction can be rejected.
/// Nothing is written when one of these is returned.
#[error_code]
pub enum VotingError {
    // Malformed requests
    #[msg("Seed components do not describe a derivable address")]
    InvalidSeed,

    #[msg("Poll start time must be before its end time")]
    InvalidTimeRange,

    #[msg("Poll question must be between 1 and 280 bytes")]
    InvalidQuestion,

    #[msg("Candidate name must be between 1 and 32 bytes")]
    InvalidName,

    #[msg("No poll exists for this id")]
    PollNotFound,

    #[msg("No candidate with this name exists in the poll")]
    CandidateNotFound,

    // Business rule rejections
    #[msg("A poll already exists for this id")]
    PollAlreadyExists,

    #[msg("A candidate with this name already exists in the poll")]
    CandidateAlreadyExists,

    #[msg("The poll is not accepting votes at this time")]
    VotingClosed,

    #[msg("The voter has already cast a vote in this poll")]
    AlreadyVoted,

    // Math
    #[msg("Counter overflow")]
    MathOverflow,
}

/// How a caller should treat a rejection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself was wrong: bad input or a reference to a missing record
    MalformedRequest,
    /// The request was well formed but the poll's rules refuse it
    BusinessRule,
    Arithmetic,
}

impl VotingError {
    /// Get error code as u32 for logging
    pub fn error_code(&self) -> u32 {
        match self {
            // Request errors: 1000-1099
            VotingError::InvalidSeed => 1001,
            VotingError::InvalidTimeRange => 1002,
            VotingError::InvalidQuestion => 1003,
            VotingError::InvalidName => 1004,
            VotingError::PollNotFound => 1005,
            VotingError::CandidateNotFound => 1006,

            // Rule errors: 1100-1199
            VotingError::PollAlreadyExists => 1101,
            VotingError::CandidateAlreadyExists => 1102,
            VotingError::VotingClosed => 1103,
            VotingError::AlreadyVoted => 1104,

            // Math errors: 1200-1299
            VotingError::MathOverflow => 1201,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.error_code() {
            1000..=1099 => ErrorKind::MalformedRequest,
            1100..=1199 => ErrorKind::BusinessRule,
            _ => ErrorKind::Arithmetic,
        }
    }

    /// Get human-readable error category
    pub fn category(&self) -> &'static str {
        match self.kind() {
            ErrorKind::MalformedRequest => "Malformed Request",
            ErrorKind::BusinessRule => "Rule Rejection",
            ErrorKind::Arithmetic => "Mathematical Operations",
        }
    }
}

/// Helper macro for logging errors with context
#[macro_export]
macro_rules! log_error {
    ($error:expr, $context:expr) => {
        ::anchor_lang::prelude::msg!(
            "Error {}: {} in context: {} ({})",
            $error.error_code(),
            $error.category(),
            $context,
            $error
        );
    };
}

/// Log a rejection and turn it into the error returned to the runtime
pub fn reject(error: VotingError, context: &str) -> anchor_lang::error::Error {
    log_error!(error, context);
    error.into()
}

/// Helper function to safely add two u64 values
pub fn safe_add_u64(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(VotingError::MathOverflow.into())
}
