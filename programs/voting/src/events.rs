use anchor_lang::prelude::*;

#[event]
pub struct PollInitialized {
    /// Address of the poll account
    pub poll: Pubkey,
    pub poll_id: u64,
    pub start_time: i64,
    pub end_time: i64,
}

#[event]
pub struct CandidateInitialized {
    pub poll_id: u64,
    /// Address of the candidate account
    pub candidate: Pubkey,
    pub name: String,
    /// Candidate count on the poll after this registration
    pub candidate_count: u64,
}

#[event]
pub struct VoteCast {
    pub poll_id: u64,
    pub candidate: Pubkey,
    pub voter: Pubkey,
    /// Candidate's vote count after this vote
    pub votes: u64,
    pub timestamp: i64,
}
