use anchor_lang::prelude::*;
use crate::{
    accessors,
    constants::*,
    error::{reject, safe_add_u64, VotingError},
    events::VoteCast,
    pda::{check_linkage, check_poll_link},
    state::{Candidate, Poll, VoterRecord},
};

// Accounts needed for casting a vote
#[derive(Accounts)]
#[instruction(poll_id: u64, candidate_name: String)]
pub struct Vote<'info> {
    // The person casting the vote (must sign the transaction)
    #[account(mut)]
    pub voter: Signer<'info>,

    /// CHECK: address is checked against `poll_id` in `process_vote`; contents
    /// are loaded through `accessors` so a missing poll is PollNotFound.
    #[account(mut)]
    pub poll: UncheckedAccount<'info>,

    /// CHECK: only read when it sits at the address `poll_id` and `candidate_name`
    /// derive to; otherwise the vote fails with CandidateNotFound.
    #[account(mut)]
    pub candidate: UncheckedAccount<'info>,

    // Voter record PDA. Loaded when it already exists so a second vote is
    // rejected with AlreadyVoted; created otherwise.
    #[account(
        init_if_needed,
        payer = voter,
        space = DISCRIMINATOR_SIZE + VoterRecord::INIT_SPACE,
        seeds = [VOTER_SEED, poll_id.to_le_bytes().as_ref(), voter.key().as_ref()],
        bump
    )]
    pub voter_record: Account<'info, VoterRecord>,

    pub system_program: Program<'info, System>,
}

impl<'info> Vote<'info> {
    pub fn vote(
        &mut self,
        poll_id: u64,
        candidate_name: String,
        bumps: &VoteBumps,
    ) -> Result<()> {
        let current_time = Clock::get()?.unix_timestamp;

        let (poll, candidate) = process_vote(
            poll_id,
            &candidate_name,
            &self.poll,
            &self.candidate,
            &mut self.voter_record,
            self.voter.key(),
            current_time,
            bumps.voter_record,
        )?;

        msg!("Vote for {} cast successfully!", candidate.name);
        msg!("Voter: {}", self.voter.key());
        msg!("Total votes for {}: {}", candidate.name, candidate.votes);
        msg!("Total votes in poll {}: {}", poll_id, poll.total_votes);

        emit!(VoteCast {
            poll_id,
            candidate: self.candidate.key(),
            voter: self.voter.key(),
            votes: candidate.votes,
            timestamp: current_time,
        });

        Ok(())
    }
}

/// Load the poll and candidate a vote names, apply the vote and write both back.
/// A poll account off its derived address is `InvalidSeed`. A candidate account
/// off its derived address (or a name that derives to nothing) holds no candidate
/// of this poll, so it is never read and the vote fails through the ordered checks.
#[allow(clippy::too_many_arguments)]
pub fn process_vote(
    poll_id: u64,
    candidate_name: &str,
    poll_info: &AccountInfo,
    candidate_info: &AccountInfo,
    record: &mut VoterRecord,
    voter: Pubkey,
    now: i64,
    bump: u8,
) -> Result<(Poll, Candidate)> {
    check_poll_link(poll_id, poll_info.key)?;

    let mut poll = accessors::try_get::<Poll>(poll_info)?;
    let mut candidate =
        match check_linkage(poll_id, candidate_name, poll_info.key, candidate_info.key) {
            Ok(()) => accessors::try_get::<Candidate>(candidate_info)?,
            Err(_) => None,
        };

    apply_vote(poll.as_mut(), candidate.as_mut(), record, voter, now, bump)?;

    match (poll, candidate) {
        (Some(poll), Some(candidate)) => {
            accessors::store(poll_info, &poll)?;
            accessors::store(candidate_info, &candidate)?;
            Ok((poll, candidate))
        }
        // apply_vote only succeeds when both records exist
        _ => Err(reject(VotingError::PollNotFound, "vote")),
    }
}

/// The vote transition. `poll` and `candidate` are `None` when nothing exists at
/// their derived address. Preconditions are checked in order: poll exists,
/// voting window is open, candidate exists, voter has not voted. Every check runs
/// before any write, so a rejected vote changes nothing.
pub fn apply_vote(
    poll: Option<&mut Poll>,
    candidate: Option<&mut Candidate>,
    record: &mut VoterRecord,
    voter: Pubkey,
    now: i64,
    bump: u8,
) -> Result<()> {
    let poll = poll.ok_or_else(|| reject(VotingError::PollNotFound, "vote"))?;

    if !poll.is_voting_open(now) {
        msg!(
            "Vote at {} is outside the voting window [{}, {})",
            now,
            poll.start_time,
            poll.end_time
        );
        return Err(reject(VotingError::VotingClosed, "vote"));
    }

    let candidate = candidate.ok_or_else(|| reject(VotingError::CandidateNotFound, "vote"))?;

    if record.has_voted {
        return Err(reject(VotingError::AlreadyVoted, "vote"));
    }

    let votes = safe_add_u64(candidate.votes, 1)?;
    let total_votes = safe_add_u64(poll.total_votes, 1)?;

    candidate.votes = votes;
    poll.total_votes = total_votes;
    *record = VoterRecord {
        poll_id: poll.poll_id,
        voter,
        candidate: candidate.name.clone(),
        has_voted: true,
        voted_at: now,
        bump,
    };

    Ok(())
}
