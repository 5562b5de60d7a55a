use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*};

// Whitelist Member Instruction
//
// A whitelister approves a pending membership request.
// Each whitelister counts once per request, two approvals are needed.
// The request is promoted right away when the fee was already paid.

#[derive(Accounts)]
#[instruction(target: Pubkey)]
pub struct WhitelistMember<'info> {
    pub whitelister: Signer<'info>,

    #[account(
        mut,
        seeds = [
            ASSOCIATION,
            association.founder.as_ref(),
        ],
        bump = association.bump,
    )]
    pub association: Account<'info, Association>,

    // Member record of the signer, must carry the whitelister role
    #[account(
        seeds = [
            MEMBER,
            association.key().as_ref(),
            whitelister.key().as_ref(),
        ],
        bump = whitelister_member.bump,
    )]
    pub whitelister_member: Account<'info, Member>,

    #[account(
        mut,
        seeds = [
            MEMBER,
            association.key().as_ref(),
            target.as_ref(),
        ],
        bump = target_member.bump,
    )]
    pub target_member: Account<'info, Member>,
}

impl<'info> WhitelistMember<'info> {
    pub fn whitelist_member(&mut self, target: Pubkey) -> Result<()> {
        // SECURITY CHECKS

        // 1. Association still operating
        self.association.require_open()?;

        // 2. Whitelister Permission Check
        require!(
            self.whitelister_member.role == MemberRole::Whitelister,
            DaaError::OnlyWhitelister
        );

        let now = Clock::get()?.unix_timestamp;
        let promoted = self.target_member.approve(
            self.whitelister.key(),
            &mut self.association,
            now,
        )?;

        if promoted {
            msg!("{} approved and promoted to member", target);
        } else {
            msg!("{} approved ({} of 2)", target, self.target_member.approvals);
        }
        emit!(MembershipStatusChanged {
            association: self.association.key(),
            address: target,
            role: self.target_member.role,
            approvals: self.target_member.approvals,
            has_paid: self.target_member.has_paid,
        });

        Ok(())
    }
}
