use anchor_lang::prelude::*;

use crate::{
    constants::*,
    error::{reject, safe_add_u64, VotingError},
    pda::{derive_with_tag, SeedTag},
};

// The Poll account stores the question, the voting window and running totals
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct Poll {
    // Identifier the poll address is derived from
    pub poll_id: u64,

    // The question being asked (e.g., "Who is the best candidate?")
    #[max_len(280)]
    pub question: String,

    // Votes are accepted in [start_time, end_time) (Unix seconds)
    pub start_time: i64,
    pub end_time: i64,

    // Number of registered candidates
    pub candidate_count: u64,

    // Total number of votes cast across all candidates
    pub total_votes: u64,

    // When this poll was created
    pub created_at: i64,

    pub bump: u8,
}

// One Candidate account per (poll, name)
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct Candidate {
    // Poll this candidate belongs to, by id rather than address
    pub poll_id: u64,

    #[max_len(32)]
    pub name: String,

    pub votes: u64,

    pub bump: u8,
}

// Voter Record - proves that a voter has voted on a specific poll.
// Its address is unique per voter per poll, so it can only ever be filled once.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct VoterRecord {
    pub poll_id: u64,

    pub voter: Pubkey,

    // Name of the candidate this voter chose
    #[max_len(32)]
    pub candidate: String,

    pub has_voted: bool,

    pub voted_at: i64,

    pub bump: u8,
}

impl Poll {
    pub fn pda(poll_id: u64) -> Result<(Pubkey, u8)> {
        derive_with_tag(SeedTag::Poll, poll_id, None)
    }

    // A freshly allocated account has every field zeroed, and a live poll always has a question
    pub fn is_initialized(&self) -> bool {
        !self.question.is_empty()
    }

    /// Fill a newly allocated poll account. Fails without touching the
    /// account if the poll already exists or the inputs are malformed.
    pub fn initialize(
        &mut self,
        poll_id: u64,
        start_time: i64,
        end_time: i64,
        question: String,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        if !is_valid_time_range(start_time, end_time) {
            msg!("Invalid time range: start {} is not before end {}", start_time, end_time);
            return Err(reject(VotingError::InvalidTimeRange, "initialize_poll"));
        }

        if !is_valid_question(&question) {
            msg!(
                "Invalid question length: {}. Must be between 1 and {} bytes",
                question.len(),
                MAX_QUESTION_LENGTH
            );
            return Err(reject(VotingError::InvalidQuestion, "initialize_poll"));
        }

        if self.is_initialized() {
            return Err(reject(VotingError::PollAlreadyExists, "initialize_poll"));
        }

        *self = Poll {
            poll_id,
            question,
            start_time,
            end_time,
            candidate_count: 0,
            total_votes: 0,
            created_at: now,
            bump,
        };

        Ok(())
    }

    // Helper method to check if poll is accepting votes at `now`
    pub fn is_voting_open(&self, now: i64) -> bool {
        self.start_time <= now && now < self.end_time
    }
}

impl Candidate {
    /// Address of the candidate `name` in poll `poll_id`. Names that cannot be
    /// used as a seed fail with `InvalidSeed`.
    pub fn pda(poll_id: u64, name: &str) -> Result<(Pubkey, u8)> {
        derive_with_tag(SeedTag::Candidate, poll_id, Some(name.as_bytes()))
    }

    pub fn is_initialized(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn check_name(name: &str) -> Result<()> {
        if !is_valid_candidate_name(name) {
            msg!(
                "Invalid candidate name length: {}. Must be between 1 and {} bytes",
                name.len(),
                MAX_CANDIDATE_NAME_LENGTH
            );
            return Err(reject(VotingError::InvalidName, "initialize_candidate"));
        }
        Ok(())
    }

    /// Fill a newly allocated candidate account and count it on its poll.
    /// Both records are left untouched on failure.
    pub fn initialize(&mut self, poll: &mut Poll, name: String, bump: u8) -> Result<()> {
        Candidate::check_name(&name)?;

        if self.is_initialized() {
            return Err(reject(VotingError::CandidateAlreadyExists, "initialize_candidate"));
        }

        let candidate_count = safe_add_u64(poll.candidate_count, 1)?;

        *self = Candidate {
            poll_id: poll.poll_id,
            name,
            votes: 0,
            bump,
        };
        poll.candidate_count = candidate_count;

        Ok(())
    }
}

impl VoterRecord {
    pub fn pda(poll_id: u64, voter: &Pubkey) -> Result<(Pubkey, u8)> {
        derive_with_tag(SeedTag::Voter, poll_id, Some(voter.as_ref()))
    }
}
