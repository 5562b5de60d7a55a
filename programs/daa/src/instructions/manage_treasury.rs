use anchor_lang::prelude::*;
use crate::{state::*, constants::*, events::*, helpers::deposit_to_vault};

// Treasury Instructions
//
// deposit_funds: anyone adds lamports to the vault, credited to the ledger
// get_total_balance: (internal ledger, vault lamports above rent floor),
//                    returned through return data

#[derive(Accounts)]
pub struct DepositFunds<'info> {
    #[account(mut)]
    pub funder: Signer<'info>,

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
            VAULT,
            association.key().as_ref(),
        ],
        bump = association.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> DepositFunds<'info> {
    pub fn deposit_funds(&mut self, amount: u64) -> Result<()> {
        self.association.require_open()?;

        self.association.treasury.receive(amount)?;
        deposit_to_vault(
            &self.system_program,
            self.funder.to_account_info(),
            &self.vault,
            amount,
        )?;

        emit!(FundsReceived {
            association: self.association.key(),
            from: self.funder.key(),
            amount,
        });

        Ok(())
    }
}

#[derive(Accounts)]
pub struct GetTotalBalance<'info> {
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
            VAULT,
            association.key().as_ref(),
        ],
        bump = association.vault_bump,
    )]
    pub vault: SystemAccount<'info>,
}

impl<'info> GetTotalBalance<'info> {
    pub fn get_total_balance(&self) -> Result<TotalBalance> {
        let rent_floor = Rent::get()?.minimum_balance(0);
        Ok(self
            .association
            .treasury
            .total_balance(self.vault.lamports(), rent_floor))
    }
}
