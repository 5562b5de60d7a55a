use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*};

// Remove Whitelister Instruction
//
// Delegate revokes a whitelister. The target goes back to NotMember.
// Rejected when only two whitelisters are left.

#[derive(Accounts)]
#[instruction(target: Pubkey)]
pub struct RemoveWhitelister<'info> {
    pub delegate: Signer<'info>,

    #[account(
        mut,
        seeds = [
            ASSOCIATION,
            association.founder.as_ref(),
        ],
        bump = association.bump,
        has_one = delegate @ DaaError::OnlyDelegate,
    )]
    pub association: Account<'info, Association>,

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

impl<'info> RemoveWhitelister<'info> {
    pub fn remove_whitelister(&mut self, target: Pubkey) -> Result<()> {
        self.association.require_open()?;

        self.target_member.revoke_whitelister(&mut self.association)?;

        msg!("{} is no longer a whitelister", target);
        emit!(WhitelisterChanged {
            association: self.association.key(),
            whitelister: target,
            added: false,
            whitelister_count: self.association.whitelister_count,
        });

        Ok(())
    }
}
