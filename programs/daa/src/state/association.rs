use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::DaaError,
    state::{AssemblySchedule, ProposalKind, Settlement, Treasury},
};

// Construction parameters of an association
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace, Default)]
pub struct AssociationConfig {
    // Minimum lamports a new member pays to join
    pub membership_fee: u64,

    // The two whitelisters seeded at creation
    pub initial_whitelister_1: Pubkey,
    pub initial_whitelister_2: Pubkey,

    // Voting window of proposals that need a general assembly in session
    pub ga_voting_window: i64,

    // Minimum distance between now and a newly proposed assembly date
    pub ga_proposal_lead_time: i64,
}

impl AssociationConfig {
    pub fn with_defaults(
        membership_fee: u64,
        initial_whitelister_1: Pubkey,
        initial_whitelister_2: Pubkey,
    ) -> Self {
        Self {
            membership_fee,
            initial_whitelister_1,
            initial_whitelister_2,
            ga_voting_window: DEFAULT_GA_VOTING_WINDOW,
            ga_proposal_lead_time: DEFAULT_GA_PROPOSAL_LEAD_TIME,
        }
    }

    pub fn validate(&self, founder: &Pubkey) -> Result<()> {
        require!(self.membership_fee > 0, DaaError::InvalidConfig);
        require!(
            self.ga_voting_window > 0 && self.ga_proposal_lead_time > 0,
            DaaError::InvalidConfig
        );
        require!(
            self.ga_proposal_lead_time < MAX_ASSEMBLY_HORIZON,
            DaaError::InvalidConfig
        );
        require_keys_neq!(self.initial_whitelister_1, Pubkey::default(), DaaError::ZeroAddress);
        require_keys_neq!(self.initial_whitelister_2, Pubkey::default(), DaaError::ZeroAddress);
        require_keys_neq!(self.initial_whitelister_1, self.initial_whitelister_2, DaaError::InvalidConfig);
        require_keys_neq!(self.initial_whitelister_1, *founder, DaaError::InvalidConfig);
        require_keys_neq!(self.initial_whitelister_2, *founder, DaaError::InvalidConfig);
        Ok(())
    }
}

// Root state of one association
// Every governance instruction takes it writable, which serializes them
#[account]
#[derive(InitSpace, Default)]
pub struct Association {
    // Creator, also the first delegate
    pub founder: Pubkey,

    // Current delegate
    pub delegate: Pubkey,

    pub config: AssociationConfig,

    // Members of any role, delegate and whitelisters included
    pub headcount: u64,

    pub whitelister_count: u32,

    // Hash of the statutes in force
    pub current_statutes: [u8; 32],

    // Proposals ever created, per kind (used for proposal numbering)
    pub proposal_counts: [u64; PROPOSAL_KIND_COUNT],

    pub schedule: AssemblySchedule,

    pub treasury: Treasury,

    // Set once a dissolution or organization update moved the funds out
    // All later state changes are rejected
    pub closed: bool,

    // New organization after an update, None when dissolved
    pub successor: Option<Pubkey>,

    pub created_at: i64,

    // PDA bump seed for association account
    pub bump: u8,

    // PDA bump seed for vault account
    // Used for vault PDA signing when paying out
    pub vault_bump: u8,
}

impl Association {
    pub fn bootstrap(
        &mut self,
        founder: Pubkey,
        config: AssociationConfig,
        now: i64,
        bump: u8,
        vault_bump: u8,
    ) {
        *self = Association {
            founder,
            delegate: founder,
            config,
            headcount: 3,
            whitelister_count: MIN_WHITELISTERS,
            created_at: now,
            bump,
            vault_bump,
            ..Association::default()
        };
    }

    pub fn require_open(&self) -> Result<()> {
        require!(!self.closed, DaaError::AssociationClosed);
        Ok(())
    }

    pub fn is_delegate(&self, key: &Pubkey) -> bool {
        &self.delegate == key
    }

    pub fn admit_member(&mut self) -> Result<()> {
        self.headcount = self.headcount.checked_add(1).ok_or(DaaError::Overflow)?;
        Ok(())
    }

    pub fn drop_member(&mut self) -> Result<()> {
        self.headcount = self.headcount.checked_sub(1).ok_or(DaaError::Overflow)?;
        Ok(())
    }

    pub fn add_whitelister(&mut self) -> Result<()> {
        self.whitelister_count = self
            .whitelister_count
            .checked_add(1)
            .ok_or(DaaError::Overflow)?;
        Ok(())
    }

    pub fn can_release_whitelister(&self) -> bool {
        self.whitelister_count > MIN_WHITELISTERS
    }

    pub fn release_whitelister(&mut self) -> Result<()> {
        require!(self.can_release_whitelister(), DaaError::WhitelisterFloor);
        self.whitelister_count -= 1;
        Ok(())
    }

    pub fn proposal_count(&self, kind: ProposalKind) -> u64 {
        self.proposal_counts[kind as usize]
    }

    // Reserve the next id for a proposal kind
    pub fn register_proposal(&mut self, kind: ProposalKind) -> Result<u64> {
        let id = self.proposal_count(kind);
        self.proposal_counts[kind as usize] = id.checked_add(1).ok_or(DaaError::Overflow)?;
        Ok(id)
    }

    // State side of a concluded proposal
    // Expulsions and lamport transfers are applied by the caller
    pub fn apply_settlement(&mut self, settlement: &Settlement) -> Result<()> {
        match *settlement {
            Settlement::Recorded | Settlement::Expel { .. } => {}
            Settlement::GrantAllowance { amount, .. } => self.treasury.grant_allowance(amount)?,
            Settlement::AdoptStatutes { statutes_hash } => self.current_statutes = statutes_hash,
            Settlement::ScheduleAssembly { date } => {
                self.schedule.schedule(date, false)?;
            }
            Settlement::Dissolve { .. } => self.close(None),
            Settlement::TransferToSuccessor { new_organization } => self.close(Some(new_organization)),
        }
        Ok(())
    }

    fn close(&mut self, successor: Option<Pubkey>) {
        self.treasury.drain();
        self.closed = true;
        self.successor = successor;
    }
}
