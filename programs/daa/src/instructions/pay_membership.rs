use anchor_lang::prelude::*;
use crate::{state::*, constants::*, events::*, helpers::deposit_to_vault};

// Pay Membership Instructions
//
// pay_membership: pay the fee at any point of a pending request
// pay_new_membership_fee: treasury variant, only after two whitelister approvals
//
// The full amount moves into the vault and is credited to the ledger.
// Paying less than the configured fee is rejected.

#[derive(Accounts)]
pub struct PayMembership<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

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
            payer.key().as_ref(),
        ],
        bump = member.bump,
    )]
    pub member: Account<'info, Member>,

    #[account(
        mut,
        seeds = [
            VAULT,
            association.key().as_ref(),
        ],
        bump = association.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> PayMembership<'info> {
    pub fn pay_membership(&mut self, amount: u64) -> Result<()> {
        self.pay(amount, false)
    }

    pub fn pay_new_membership_fee(&mut self, amount: u64) -> Result<()> {
        self.pay(amount, true)
    }

    fn pay(&mut self, amount: u64, strict: bool) -> Result<()> {
        self.association.require_open()?;

        let now = Clock::get()?.unix_timestamp;
        let fee = self.association.config.membership_fee;

        let promoted = self.member.pay(&mut self.association, strict, now)?;
        self.association.treasury.accept_membership_fee(amount, fee)?;

        deposit_to_vault(
            &self.system_program,
            self.payer.to_account_info(),
            &self.vault,
            amount,
        )?;

        let association = self.association.key();
        msg!("Membership fee of {} lamports paid by {}", amount, self.payer.key());
        if promoted {
            msg!("{} promoted to member", self.payer.key());
        }
        emit!(FundsReceived {
            association,
            from: self.payer.key(),
            amount,
        });
        emit!(MembershipStatusChanged {
            association,
            address: self.member.address,
            role: self.member.role,
            approvals: self.member.approvals,
            has_paid: self.member.has_paid,
        });

        Ok(())
    }
}
