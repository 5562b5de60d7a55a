use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*};

// Create Proposal Instruction
//
// Single submission entry for all eight proposal kinds.
// Eligibility and assembly gates per kind:
// - Simple, ExpelMember, AssemblyDate: any member, any time
// - DelegateCandidacy, ChangeStatutes, Dissolution, UpdateOrganization:
//   any member, general assembly in session
// - Discharge: delegate only, annual assembly in session
//
// Proposal ids are sequential per kind.
// ExpelMember needs the target's member record as subject_member.

#[derive(Accounts)]
#[instruction(request: ProposalRequest)]
pub struct CreateProposal<'info> {
    // Submitter - pays for the proposal account
    #[account(mut)]
    pub submitter: Signer<'info>,

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
        seeds = [
            MEMBER,
            association.key().as_ref(),
            submitter.key().as_ref(),
        ],
        bump = submitter_member.bump,
    )]
    pub submitter_member: Account<'info, Member>,

    // Member record of the expulsion target
    #[account(
        constraint = subject_member.association == association.key() @ DaaError::MemberMismatch,
    )]
    pub subject_member: Option<Account<'info, Member>>,

    // Proposal PDA
    // Seeds: ["proposal", association, kind, id]
    #[account(
        init,
        payer = submitter,
        space = ANCHOR_DISCRIMINATOR + Proposal::INIT_SPACE,
        seeds = [
            PROPOSAL,
            association.key().as_ref(),
            &[request.kind() as u8],
            &association.proposal_count(request.kind()).to_le_bytes(),
        ],
        bump,
    )]
    pub proposal: Account<'info, Proposal>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateProposal<'info> {
    pub fn create_proposal(&mut self, request: ProposalRequest, bumps: &CreateProposalBumps) -> Result<()> {
        self.association.require_open()?;

        let now = Clock::get()?.unix_timestamp;
        let association = self.association.key();

        let (payload, duration) = request.admit(
            &mut self.association,
            &self.submitter_member,
            self.subject_member.as_deref(),
            now,
        )?;
        let id = self.association.register_proposal(payload.kind())?;

        self.proposal.set_inner(Proposal::open(
            association,
            id,
            self.submitter.key(),
            payload,
            duration,
            now,
            bumps.proposal,
        ));

        msg!(
            "Proposal {:?} #{} opened by {}, voting until {}",
            self.proposal.kind,
            id,
            self.submitter.key(),
            self.proposal.deadline()
        );
        emit!(ProposalCreated {
            association,
            proposal: self.proposal.key(),
            kind: self.proposal.kind,
            id,
            submitter: self.submitter.key(),
            deadline: self.proposal.deadline(),
        });

        Ok(())
    }
}
