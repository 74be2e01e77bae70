use anchor_lang::prelude::*;

// Import our modules
pub mod accessors;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

// Import instruction handlers
use instructions::*;

declare_id!("HJPdbG1P64vHKYU8MqTHhsWGwKVxRTcbKp1vQRU1RvrL");

#[program]
pub mod voting {
    use super::*;

    /// Create the poll for `poll_id` with its question and voting window
    pub fn initialize_poll(
        ctx: Context<InitializePoll>,
        poll_id: u64,
        start_time: i64,
        end_time: i64,
        question: String,
    ) -> Result<()> {
        ctx.accounts
            .initialize_poll(poll_id, start_time, end_time, question, &ctx.bumps)
    }

    /// Register a candidate on an existing poll
    pub fn initialize_candidate(
        ctx: Context<InitializeCandidate>,
        poll_id: u64,
        candidate_name: String,
    ) -> Result<()> {
        ctx.accounts
            .initialize_candidate(poll_id, candidate_name, &ctx.bumps)
    }

    /// Cast the signer's single vote in the poll
    pub fn vote(ctx: Context<Vote>, poll_id: u64, candidate_name: String) -> Result<()> {
        ctx.accounts.vote(poll_id, candidate_name, &ctx.bumps)
    }
}
