use anchor_lang::prelude::*;
use crate::{state::*, constants::*, events::*, helpers::pay_from_vault};

// Withdraw From Internal Wallet Instruction
//
// The destination of a passed simple proposal collects its allowance.
// Paid exactly once; ledger balance and outstanding allowances drop by
// the paid amount.

#[derive(Accounts)]
pub struct WithdrawFromInternalWallet<'info> {
    #[account(mut)]
    pub destination: Signer<'info>,

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

    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawFromInternalWallet<'info> {
    pub fn withdraw_from_internal_wallet(&mut self) -> Result<()> {
        self.association.require_open()?;

        let amount = self.proposal.claim_allowance(&self.destination.key())?;
        self.association.treasury.release_allowance(amount)?;

        let association = self.association.key();
        pay_from_vault(
            &self.system_program,
            &self.vault,
            self.destination.to_account_info(),
            &association,
            self.association.vault_bump,
            amount,
        )?;

        msg!(
            "Allowance of {} lamports from proposal #{} paid to {}",
            amount,
            self.proposal.id,
            self.destination.key()
        );
        emit!(FundsDisbursed {
            association,
            recipient: self.destination.key(),
            amount,
        });

        Ok(())
    }
}
