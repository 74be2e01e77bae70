use anchor_lang::prelude::*;
use crate::{constants::*, events::PollInitialized, state::Poll};

// Accounts needed for creating a new poll
#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct InitializePoll<'info> {
    // Pays for the poll account
    #[account(mut)]
    pub payer: Signer<'info>,

    // The poll account (PDA). An existing poll is loaded instead of created so
    // a repeat call is rejected with PollAlreadyExists rather than a system error.
    #[account(
        init_if_needed,
        payer = payer,
        space = DISCRIMINATOR_SIZE + Poll::INIT_SPACE,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: Account<'info, Poll>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializePoll<'info> {
    pub fn initialize_poll(
        &mut self,
        poll_id: u64,
        start_time: i64,
        end_time: i64,
        question: String,
        bumps: &InitializePollBumps,
    ) -> Result<()> {
        let current_time = Clock::get()?.unix_timestamp;

        self.poll
            .initialize(poll_id, start_time, end_time, question, current_time, bumps.poll)?;

        msg!("Poll {} initialized: {}", poll_id, self.poll.question);
        msg!("Voting window: [{}, {})", start_time, end_time);

        emit!(PollInitialized {
            poll: self.poll.key(),
            poll_id,
            start_time,
            end_time,
        });

        Ok(())
    }
}
