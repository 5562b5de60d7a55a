use anchor_lang::prelude::*;
use crate::state::{MemberRole, ProposalKind, VoteChoice};

#[event]
pub struct MembershipStatusChanged {
    pub association: Pubkey,
    pub address: Pubkey,
    pub role: MemberRole,
    pub approvals: u8,
    pub has_paid: bool,
}

#[event]
pub struct WhitelisterChanged {
    pub association: Pubkey,
    pub whitelister: Pubkey,
    pub added: bool,
    pub whitelister_count: u32,
}

#[event]
pub struct ProposalCreated {
    pub association: Pubkey,
    pub proposal: Pubkey,
    pub kind: ProposalKind,
    pub id: u64,
    pub submitter: Pubkey,
    pub deadline: i64,
}

#[event]
pub struct VoteCast {
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub choice: VoteChoice,
}

#[event]
pub struct ProposalConcluded {
    pub association: Pubkey,
    pub proposal: Pubkey,
    pub kind: ProposalKind,
    pub id: u64,
    pub result: bool,
    pub votes_for: u64,
    pub votes_against: u64,
    pub votes_abstain: u64,
}

#[event]
pub struct AssemblyScheduled {
    pub association: Pubkey,
    pub index: u64,
    pub date: i64,
    pub annual: bool,
}

#[event]
pub struct AssemblyStarted {
    pub association: Pubkey,
    pub index: u64,
    pub annual: bool,
}

#[event]
pub struct AssemblyCancelled {
    pub association: Pubkey,
    pub index: u64,
    pub date: i64,
    pub annual: bool,
}

#[event]
pub struct AssemblyFinished {
    pub association: Pubkey,
    pub index: u64,
    pub finished_at: i64,
}

#[event]
pub struct DelegateElected {
    pub association: Pubkey,
    pub previous: Pubkey,
    pub delegate: Pubkey,
    pub session: u64,
}

#[event]
pub struct FundsReceived {
    pub association: Pubkey,
    pub from: Pubkey,
    pub amount: u64,
}

#[event]
pub struct FundsDisbursed {
    pub association: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}
