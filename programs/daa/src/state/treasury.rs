use anchor_lang::prelude::*;
use crate::errors::DaaError;

// Ledger of the lamports held by the vault PDA
// The vault itself keeps a rent-exempt floor that is not part of the ledger
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace, Default)]
pub struct Treasury {
    // Spendable lamports
    pub internal_balance: u64,

    // Granted to passed simple proposals and not yet withdrawn
    pub total_allowance: u64,

    pub total_received: u64,
    pub total_disbursed: u64,
}

// Returned by get_total_balance
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TotalBalance {
    // Ledger balance
    pub internal: u64,
    // Lamports actually held by the vault above its rent floor
    pub external: u64,
}

impl Treasury {
    pub fn receive(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, DaaError::InvalidAmount);
        self.internal_balance = self
            .internal_balance
            .checked_add(amount)
            .ok_or(DaaError::Overflow)?;
        self.total_received = self
            .total_received
            .checked_add(amount)
            .ok_or(DaaError::Overflow)?;
        Ok(())
    }

    pub fn accept_membership_fee(&mut self, amount: u64, fee: u64) -> Result<()> {
        require!(amount >= fee, DaaError::InsufficientPayment);
        self.receive(amount)
    }

    // Lamports not yet promised to any allowance
    pub fn available(&self) -> u64 {
        self.internal_balance.saturating_sub(self.total_allowance)
    }

    pub fn grant_allowance(&mut self, amount: u64) -> Result<()> {
        self.total_allowance = self
            .total_allowance
            .checked_add(amount)
            .ok_or(DaaError::Overflow)?;
        Ok(())
    }

    // Pay out a granted allowance
    pub fn release_allowance(&mut self, amount: u64) -> Result<()> {
        require!(self.internal_balance >= amount, DaaError::InsufficientFunds);
        self.internal_balance -= amount;
        self.total_allowance = self
            .total_allowance
            .checked_sub(amount)
            .ok_or(DaaError::Overflow)?;
        self.total_disbursed = self
            .total_disbursed
            .checked_add(amount)
            .ok_or(DaaError::Overflow)?;
        Ok(())
    }

    // Empty the ledger, returns what it held
    pub fn drain(&mut self) -> u64 {
        let drained = self.internal_balance;
        self.internal_balance = 0;
        self.total_allowance = 0;
        self.total_disbursed = self.total_disbursed.saturating_add(drained);
        drained
    }

    pub fn total_balance(&self, vault_lamports: u64, rent_floor: u64) -> TotalBalance {
        TotalBalance {
            internal: self.internal_balance,
            external: vault_lamports.saturating_sub(rent_floor),
        }
    }
}
