use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

// Extend Proposal Duration Instruction
//
// The submitter of an open simple proposal adds time to its voting window.
// The total window never exceeds 60 days.

#[derive(Accounts)]
pub struct ExtendProposalDuration<'info> {
    pub submitter: Signer<'info>,

    #[account(
        seeds = [
            ASSOCIATION,
            association.founder.as_ref(),
        ],
        bump = association.bump,
    )]
    pub association: Account<'info, Association>,

    #[account(
        mut,
        seeds = [
            PROPOSAL,
            association.key().as_ref(),
            &[proposal.kind as u8],
            &proposal.id.to_le_bytes(),
        ],
        bump = proposal.bump,
    )]
    pub proposal: Account<'info, Proposal>,
}

impl<'info> ExtendProposalDuration<'info> {
    pub fn extend_proposal_duration(&mut self, extra: i64) -> Result<()> {
        self.association.require_open()?;

        let now = Clock::get()?.unix_timestamp;
        self.proposal.extend(&self.submitter.key(), extra, now)?;

        msg!(
            "Proposal #{} extended by {}s, voting until {}",
            self.proposal.id,
            extra,
            self.proposal.deadline()
        );

        Ok(())
    }
}
