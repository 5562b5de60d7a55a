use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, helpers::settle_proposal};

// Conclude Proposal Instruction
//
// Anyone may conclude a proposal once its voting window elapsed.
// The result is computed with the proposal kind's voting rule and the
// outcome applied in the same transaction:
// - Simple: allowance granted to the destination
// - ChangeStatutes: statutes hash replaced
// - Dissolution / UpdateOrganization: whole vault sent to the recipient
// - ExpelMember: target reset to NotMember
// - AssemblyDate: extraordinary assembly scheduled

#[derive(Accounts)]
pub struct ConcludeProposal<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
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

    #[account(
        mut,
        seeds = [
            VAULT,
            association.key().as_ref(),
        ],
        bump = association.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    /// CHECK: Validated against the proposal payload before any transfer
    #[account(mut)]
    pub recipient: Option<UncheckedAccount<'info>>,

    #[account(
        mut,
        constraint = subject_member.association == association.key() @ DaaError::MemberMismatch,
    )]
    pub subject_member: Option<Account<'info, Member>>,

    pub system_program: Program<'info, System>,
}

impl<'info> ConcludeProposal<'info> {
    pub fn conclude_proposal(&mut self) -> Result<()> {
        self.association.require_open()?;

        let now = Clock::get()?.unix_timestamp;
        let settlement = settle_proposal(
            &mut self.association,
            &mut self.proposal,
            &self.vault,
            self.recipient.as_ref(),
            self.subject_member.as_mut(),
            &self.system_program,
            now,
        )?;

        msg!(
            "Proposal #{} concluded with result {} ({:?})",
            self.proposal.id,
            self.proposal.result,
            settlement
        );

        Ok(())
    }
}
