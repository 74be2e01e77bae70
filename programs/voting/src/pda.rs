use anchor_lang::prelude::*;

use crate::{constants::*, error::VotingError};

/// The record families this program stores.
/// No tag is a prefix of another and the poll id that follows is fixed width,
/// so seeds from different families can never concatenate to the same bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedTag {
    Poll,
    Candidate,
    Voter,
}

impl SeedTag {
    pub const ALL: [SeedTag; 3] = [SeedTag::Poll, SeedTag::Candidate, SeedTag::Voter];

    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            SeedTag::Poll => POLL_SEED,
            SeedTag::Candidate => CANDIDATE_SEED,
            SeedTag::Voter => VOTER_SEED,
        }
    }

    /// Parse the textual tag a client puts in front of its seeds
    pub fn parse(tag: &str) -> Result<Self> {
        SeedTag::ALL
            .into_iter()
            .find(|known| known.as_bytes() == tag.as_bytes())
            .ok_or(VotingError::InvalidSeed.into())
    }

    /// Candidates are keyed by name and voter records by voter key; polls by id only
    fn requires_discriminant(&self) -> bool {
        !matches!(self, SeedTag::Poll)
    }
}

/// Derive the address of a record from its tag, poll id and optional discriminant
/// (candidate name or voter key). Pure; clients call this to find the accounts to
/// pass in, and the program calls it to check the accounts it was given.
pub fn derive_address(tag: &str, poll_id: u64, discriminant: Option<&[u8]>) -> Result<(Pubkey, u8)> {
    derive_with_tag(SeedTag::parse(tag)?, poll_id, discriminant)
}

pub fn derive_with_tag(tag: SeedTag, poll_id: u64, discriminant: Option<&[u8]>) -> Result<(Pubkey, u8)> {
    let id_bytes = poll_id.to_le_bytes();

    match (tag.requires_discriminant(), discriminant) {
        (false, None) => Ok(Pubkey::find_program_address(
            &[tag.as_bytes(), id_bytes.as_ref()],
            &crate::ID,
        )),
        (true, Some(extra)) if !extra.is_empty() && extra.len() <= MAX_SEED_LENGTH => {
            Ok(Pubkey::find_program_address(
                &[tag.as_bytes(), id_bytes.as_ref(), extra],
                &crate::ID,
            ))
        }
        _ => Err(VotingError::InvalidSeed.into()),
    }
}

/// The poll account an instruction was given must sit at the address its id derives to
pub fn check_poll_link(poll_id: u64, poll_key: &Pubkey) -> Result<()> {
    let (poll_address, _) = derive_with_tag(SeedTag::Poll, poll_id, None)?;
    require_keys_eq!(*poll_key, poll_address, VotingError::InvalidSeed);
    Ok(())
}

/// Both the poll and the candidate account must match what `poll_id` and
/// `candidate_name` derive to. Any mismatch, or a name that cannot be a seed,
/// is `InvalidSeed`.
pub fn check_linkage(
    poll_id: u64,
    candidate_name: &str,
    poll_key: &Pubkey,
    candidate_key: &Pubkey,
) -> Result<()> {
    check_poll_link(poll_id, poll_key)?;

    let (candidate_address, _) =
        derive_with_tag(SeedTag::Candidate, poll_id, Some(candidate_name.as_bytes()))?;
    require_keys_eq!(*candidate_key, candidate_address, VotingError::InvalidSeed);
    Ok(())
}
