use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*};

// Remove Unpaid Member Instruction
//
// A whitelister drops a fully approved membership request whose fee
// was not paid within 365 days of the request.

#[derive(Accounts)]
#[instruction(target: Pubkey)]
pub struct RemoveUnpaidMember<'info> {
    pub whitelister: Signer<'info>,

    #[account(
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

impl<'info> RemoveUnpaidMember<'info> {
    pub fn remove_unpaid_member(&mut self, target: Pubkey) -> Result<()> {
        // SECURITY CHECKS

        // 1. Association still operating
        self.association.require_open()?;

        // 2. Whitelister Permission Check
        require!(
            self.whitelister_member.role == MemberRole::Whitelister,
            DaaError::OnlyWhitelister
        );

        // 3. Request pending, unpaid and past its deadline
        let now = Clock::get()?.unix_timestamp;
        self.target_member.expire_unpaid(now)?;

        msg!("Unpaid membership request of {} removed", target);
        emit!(MembershipStatusChanged {
            association: self.association.key(),
            address: target,
            role: self.target_member.role,
            approvals: 0,
            has_paid: false,
        });

        Ok(())
    }
}
