use anchor_lang::prelude::*;
use crate::errors::DaaError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum VoteChoice {
    For,
    Against,
    // Counts toward participation only
    #[default]
    Abstain,
}

// Vote record, one PDA per (proposal, voter)
// Its existence with `cast` set is what blocks a second vote
#[account]
#[derive(InitSpace, Default)]
pub struct VoteRecord {
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub choice: VoteChoice,
    pub cast: bool,
    pub voted_at: i64,
    pub bump: u8,
}

impl VoteRecord {
    pub fn mark(
        &mut self,
        proposal: Pubkey,
        voter: Pubkey,
        choice: VoteChoice,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.cast, DaaError::AlreadyVoted);
        *self = VoteRecord {
            proposal,
            voter,
            choice,
            cast: true,
            voted_at: now,
            bump,
        };
        Ok(())
    }
}
