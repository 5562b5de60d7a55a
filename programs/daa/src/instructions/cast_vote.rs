use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*, helpers::settle_proposal};

// Cast Vote Instruction
//
// One vote per member per proposal (For, Against or Abstain).
// Delegate candidacies accept For only, and each member backs a single
// candidate per assembly session.
//
// Settlement on late votes:
// when the voting window already elapsed, the call concludes the proposal
// and applies its outcome instead. The vote itself is not recorded and the
// transaction still succeeds. Voting on a concluded proposal fails.
//
// Settling may need extra accounts:
// - recipient: beneficiary of a Dissolution or UpdateOrganization proposal
// - subject_member: target of an ExpelMember proposal

#[derive(Accounts)]
pub struct CastVote<'info> {
    // Voter - pays for the vote record
    #[account(mut)]
    pub voter: Signer<'info>,

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
            MEMBER,
            association.key().as_ref(),
            voter.key().as_ref(),
        ],
        bump = voter_member.bump,
    )]
    pub voter_member: Account<'info, Member>,

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

    // Vote record PDA
    // Seeds: ["vote", proposal, voter]
    #[account(
        init_if_needed,
        payer = voter,
        space = ANCHOR_DISCRIMINATOR + VoteRecord::INIT_SPACE,
        seeds = [
            VOTE_RECORD,
            proposal.key().as_ref(),
            voter.key().as_ref(),
        ],
        bump,
    )]
    pub vote_record: Account<'info, VoteRecord>,

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

impl<'info> CastVote<'info> {
    pub fn cast_vote(&mut self, choice: VoteChoice, bumps: &CastVoteBumps) -> Result<()> {
        // SECURITY CHECKS

        // 1. Association still operating
        self.association.require_open()?;

        // 2. Voter is a member
        require!(self.voter_member.role.is_member(), DaaError::NotAMember);

        // 3. Late vote settles the proposal instead
        let now = Clock::get()?.unix_timestamp;
        if self.proposal.due_for_settlement(now) {
            msg!(
                "Voting window of proposal #{} closed, concluding instead of voting",
                self.proposal.id
            );
            settle_proposal(
                &mut self.association,
                &mut self.proposal,
                &self.vault,
                self.recipient.as_ref(),
                self.subject_member.as_mut(),
                &self.system_program,
                now,
            )?;
            return Ok(());
        }

        // 4. Count the vote (rejects concluded proposals and invalid choices)
        self.proposal.cast_vote(choice, now)?;

        // 5. One vote per address
        self.vote_record.mark(
            self.proposal.key(),
            self.voter.key(),
            choice,
            now,
            bumps.vote_record,
        )?;

        // 6. One delegate candidate per member and session
        if let Some((_, session)) = self.proposal.candidacy() {
            self.voter_member.record_delegate_vote(session)?;
        }

        emit!(VoteCast {
            proposal: self.proposal.key(),
            voter: self.voter.key(),
            choice,
        });

        Ok(())
    }
}
