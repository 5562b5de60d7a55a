use anchor_lang::prelude::*;
use crate::{state::*, constants::*, events::*};

// Leave DAA Instruction
//
// A member gives up their membership. The delegate cannot leave and
// a whitelister can only leave while more than two remain.
// Fees already paid stay in the treasury.

#[derive(Accounts)]
pub struct LeaveDaa<'info> {
    pub member: Signer<'info>,

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
            member.key().as_ref(),
        ],
        bump = member_record.bump,
    )]
    pub member_record: Account<'info, Member>,
}

impl<'info> LeaveDaa<'info> {
    pub fn leave_daa(&mut self) -> Result<()> {
        self.association.require_open()?;

        self.member_record.leave(&mut self.association)?;

        msg!("{} left the association", self.member.key());
        emit!(MembershipStatusChanged {
            association: self.association.key(),
            address: self.member.key(),
            role: self.member_record.role,
            approvals: 0,
            has_paid: false,
        });

        Ok(())
    }
}
