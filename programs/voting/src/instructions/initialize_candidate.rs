use anchor_lang::prelude::*;
use crate::{
    accessors,
    constants::*,
    events::CandidateInitialized,
    pda::check_linkage,
    state::Candidate,
};

// Accounts needed for registering a candidate on an existing poll
#[derive(Accounts)]
#[instruction(poll_id: u64, candidate_name: String)]
pub struct InitializeCandidate<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: address is checked against `poll_id` in the handler and the
    /// record is loaded through `accessors`, so a missing poll is PollNotFound.
    #[account(mut)]
    pub poll: UncheckedAccount<'info>,

    // Candidate PDA, unique per (poll, name)
    #[account(
        init_if_needed,
        payer = payer,
        space = DISCRIMINATOR_SIZE + Candidate::INIT_SPACE,
        seeds = [CANDIDATE_SEED, poll_id.to_le_bytes().as_ref(), candidate_name.as_bytes()],
        bump
    )]
    pub candidate: Account<'info, Candidate>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeCandidate<'info> {
    pub fn initialize_candidate(
        &mut self,
        poll_id: u64,
        candidate_name: String,
        bumps: &InitializeCandidateBumps,
    ) -> Result<()> {
        Candidate::check_name(&candidate_name)?;
        check_linkage(poll_id, &candidate_name, &self.poll.key(), &self.candidate.key())?;

        let mut poll = accessors::get_poll(&self.poll)?;

        self.candidate.initialize(&mut poll, candidate_name, bumps.candidate)?;
        accessors::store(&self.poll, &poll)?;

        msg!(
            "Candidate {} registered for poll {} ({} candidates)",
            self.candidate.name,
            poll_id,
            poll.candidate_count
        );

        emit!(CandidateInitialized {
            poll_id,
            candidate: self.candidate.key(),
            name: self.candidate.name.clone(),
            candidate_count: poll.candidate_count,
        });

        Ok(())
    }
}
