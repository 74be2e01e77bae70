//! Read and write records that an instruction receives by address rather than
//! as typed accounts. A record "exists" when its account is owned by this
//! program and holds data; anything else at the address counts as absent.

use anchor_lang::prelude::*;

use crate::{
    error::VotingError,
    state::{Candidate, Poll, VoterRecord},
};

/// Load the record stored at `info`, or `None` if nothing lives there yet.
/// Data that is present but not a `T` is an error, not an absence.
pub fn try_get<T>(info: &AccountInfo) -> Result<Option<T>>
where
    T: AccountDeserialize + Owner,
{
    if info.owner != &T::owner() || info.data_is_empty() {
        return Ok(None);
    }

    let data = info.try_borrow_data()?;
    let mut bytes: &[u8] = &data;
    let record = T::try_deserialize(&mut bytes)?;
    Ok(Some(record))
}

/// Write `record` back into the account it was loaded from
pub fn store<T: AccountSerialize>(info: &AccountInfo, record: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    record.try_serialize(&mut writer)?;
    Ok(())
}

pub fn get_poll(info: &AccountInfo) -> Result<Poll> {
    try_get::<Poll>(info)?.ok_or(VotingError::PollNotFound.into())
}

pub fn get_candidate(info: &AccountInfo) -> Result<Candidate> {
    try_get::<Candidate>(info)?.ok_or(VotingError::CandidateNotFound.into())
}

/// Unreadable data at the address counts as "not voted"; the failure is logged.
pub fn has_voted(info: &AccountInfo) -> bool {
    match try_get::<VoterRecord>(info) {
        Ok(record) => record.is_some_and(|record| record.has_voted),
        Err(error) => {
            msg!("Unreadable voter record at {}: {}", info.key, error);
            false
        }
    }
}
