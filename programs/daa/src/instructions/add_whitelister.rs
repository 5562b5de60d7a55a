use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*};

// Add Whitelister Instruction
//
// Delegate grants the whitelister role to an address.
// A non-member target becomes a member through this, and is counted.

#[derive(Accounts)]
#[instruction(target: Pubkey)]
pub struct AddWhitelister<'info> {
    // Delegate - pays for the target record if it does not exist yet
    #[account(mut)]
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
        init_if_needed,
        payer = delegate,
        space = ANCHOR_DISCRIMINATOR + Member::INIT_SPACE,
        seeds = [
            MEMBER,
            association.key().as_ref(),
            target.as_ref(),
        ],
        bump,
    )]
    pub target_member: Account<'info, Member>,

    pub system_program: Program<'info, System>,
}

impl<'info> AddWhitelister<'info> {
    pub fn add_whitelister(&mut self, target: Pubkey, bumps: &AddWhitelisterBumps) -> Result<()> {
        // SECURITY CHECKS

        // 1. Association still operating
        self.association.require_open()?;

        // 2. Valid target
        require_keys_neq!(target, Pubkey::default(), DaaError::ZeroAddress);

        let association = self.association.key();
        let now = Clock::get()?.unix_timestamp;

        self.target_member.bind(association, target, bumps.target_member);
        self.target_member.grant_whitelister(&mut self.association, now)?;

        msg!("{} is now a whitelister", target);
        emit!(WhitelisterChanged {
            association,
            whitelister: target,
            added: true,
            whitelister_count: self.association.whitelister_count,
        });

        Ok(())
    }
}
