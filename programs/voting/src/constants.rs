// PDA Seeds for deterministic address generation

/// Seed for Poll PDAs: ["poll", poll_id]
/// One poll per id, so the id alone locates the record
pub const POLL_SEED: &[u8] = b"poll";

/// Seed for Candidate PDAs: ["candidate", poll_id, name]
/// Names are unique within a poll because the name is part of the address
pub const CANDIDATE_SEED: &[u8] = b"candidate";

/// Seed for VoterRecord PDAs: ["voter", poll_id, voter.key()]
/// This ensures one voter record per voter per poll
pub const VOTER_SEED: &[u8] = b"voter";

// Maximum values for validation

/// Maximum poll question length in bytes (matches `#[max_len]` on `Poll::question`)
pub const MAX_QUESTION_LENGTH: usize = 280;

/// Maximum candidate name length in bytes.
/// The name is used verbatim as a PDA seed, and a seed can be at most 32 bytes.
pub const MAX_CANDIDATE_NAME_LENGTH: usize = 32;

/// Maximum length of a single PDA seed
pub const MAX_SEED_LENGTH: usize = 32;

// Anchor discriminator size (8 bytes)
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Check that a poll question is non-empty and fits in the account
pub fn is_valid_question(question: &str) -> bool {
    !question.is_empty() && question.len() <= MAX_QUESTION_LENGTH
}

/// Check that a candidate name is non-empty and usable as a seed
pub fn is_valid_candidate_name(name: &str) -> bool {
    !name.is_empty() && name.len() <= MAX_CANDIDATE_NAME_LENGTH
}

/// Voting window is half-open, so it must not be empty
pub fn is_valid_time_range(start_time: i64, end_time: i64) -> bool {
    start_time < end_time
}
