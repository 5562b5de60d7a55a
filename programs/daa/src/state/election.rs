use anchor_lang::prelude::*;
use crate::{errors::DaaError, state::Proposal};

// Support collected by one delegate candidacy proposal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidacy {
    pub candidate: Pubkey,
    pub votes: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElectionOutcome {
    Elected(Pubkey),
    // Tie for the top spot or nobody got a vote
    NoWinner,
}

// Votes are summed per candidate, the unique leader with at least one vote wins
pub fn tally_election(candidacies: &[Candidacy]) -> ElectionOutcome {
    let mut totals: Vec<(Pubkey, u64)> = Vec::with_capacity(candidacies.len());
    for candidacy in candidacies {
        match totals.iter_mut().find(|(candidate, _)| *candidate == candidacy.candidate) {
            Some((_, votes)) => *votes = votes.saturating_add(candidacy.votes),
            None => totals.push((candidacy.candidate, candidacy.votes)),
        }
    }

    let top = totals.iter().map(|(_, votes)| *votes).max().unwrap_or(0);
    if top == 0 {
        return ElectionOutcome::NoWinner;
    }
    let mut leaders = totals.iter().filter(|(_, votes)| *votes == top);
    match (leaders.next(), leaders.next()) {
        (Some((candidate, _)), None) => ElectionOutcome::Elected(*candidate),
        _ => ElectionOutcome::NoWinner,
    }
}

// Turn the candidacy proposals of `session` into tally entries
// The set must be complete, concluded and free of duplicates
pub fn collect_candidacies(
    proposals: &[Proposal],
    association: &Pubkey,
    session: u64,
    expected: u64,
) -> Result<Vec<Candidacy>> {
    require!(proposals.len() as u64 == expected, DaaError::ElectionStillOpen);

    let mut seen: Vec<u64> = Vec::with_capacity(proposals.len());
    let mut candidacies = Vec::with_capacity(proposals.len());
    for proposal in proposals {
        require_keys_eq!(proposal.association, *association, DaaError::ProposalMismatch);
        let (candidate, candidacy_session) =
            proposal.candidacy().ok_or(DaaError::ProposalMismatch)?;
        require!(candidacy_session == session, DaaError::ProposalMismatch);
        require!(proposal.concluded, DaaError::ElectionStillOpen);
        require!(!seen.contains(&proposal.id), DaaError::DuplicateCandidacy);

        seen.push(proposal.id);
        candidacies.push(Candidacy {
            candidate,
            votes: proposal.votes_for,
        });
    }
    Ok(candidacies)
}
