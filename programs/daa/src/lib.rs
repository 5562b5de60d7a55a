use anchor_lang::prelude::*;
pub mod instructions;
pub mod errors;
pub mod state;
pub mod constants;
pub mod events;
pub mod helpers;

pub use instructions::*;
pub use errors::*;
pub use state::*;

declare_id!("Bk9MWN4GXnraEGzHDpwdSdDbYhgt37mwVVNA1NWZLFUy");

#[program]
pub mod daa {
    use super::*;

    // Create a new association
    // Founder becomes delegate, the two configured addresses become whitelisters
    // Also creates the vault PDA that holds the treasury
    pub fn initialize(ctx: Context<Initialize>, config: AssociationConfig) -> Result<()> {
        ctx.accounts.initialize(config, &ctx.bumps)
    }

    // ---------------------------------------------------------------
    // Membership
    // ---------------------------------------------------------------

    // Open a membership request for the signer
    pub fn request_membership(ctx: Context<RequestMembership>) -> Result<()> {
        ctx.accounts.request_membership(&ctx.bumps)
    }

    // Delegate only
    pub fn add_whitelister(ctx: Context<AddWhitelister>, target: Pubkey) -> Result<()> {
        ctx.accounts.add_whitelister(target, &ctx.bumps)
    }

    // Delegate only, at least two whitelisters remain
    pub fn remove_whitelister(ctx: Context<RemoveWhitelister>, target: Pubkey) -> Result<()> {
        ctx.accounts.remove_whitelister(target)
    }

    // Whitelister approves a pending request
    pub fn whitelist_member(ctx: Context<WhitelistMember>, target: Pubkey) -> Result<()> {
        ctx.accounts.whitelist_member(target)
    }

    // Pay the membership fee, before or after whitelisting
    pub fn pay_membership(ctx: Context<PayMembership>, amount: u64) -> Result<()> {
        ctx.accounts.pay_membership(amount)
    }

    // Pay the membership fee once two whitelisters approved
    pub fn pay_new_membership_fee(ctx: Context<PayMembership>, amount: u64) -> Result<()> {
        ctx.accounts.pay_new_membership_fee(amount)
    }

    pub fn leave_daa(ctx: Context<LeaveDaa>) -> Result<()> {
        ctx.accounts.leave_daa()
    }

    // Whitelister drops a request left unpaid for more than 365 days
    pub fn remove_member_that_didnt_pay(ctx: Context<RemoveUnpaidMember>, target: Pubkey) -> Result<()> {
        ctx.accounts.remove_unpaid_member(target)
    }

    // ---------------------------------------------------------------
    // General assemblies (delegate only)
    // ---------------------------------------------------------------

    pub fn set_annual_assembly_date(ctx: Context<ManageAssembly>, date: i64) -> Result<()> {
        ctx.accounts.set_annual_assembly_date(date)
    }

    pub fn start_general_assembly(ctx: Context<ManageAssembly>, index: u64) -> Result<()> {
        ctx.accounts.start_general_assembly(index)
    }

    pub fn finish_current_general_assembly(ctx: Context<ManageAssembly>) -> Result<()> {
        ctx.accounts.finish_current_general_assembly()
    }

    pub fn cancel_general_assembly(ctx: Context<ManageAssembly>, index: u64) -> Result<()> {
        ctx.accounts.cancel_general_assembly(index)
    }

    // ---------------------------------------------------------------
    // Proposals
    // ---------------------------------------------------------------

    // Submit any of the eight proposal kinds
    // Assembly gated kinds need a session in progress
    pub fn create_proposal(ctx: Context<CreateProposal>, request: ProposalRequest) -> Result<()> {
        ctx.accounts.create_proposal(request, &ctx.bumps)
    }

    // Submitter only, simple proposals, 60 days at most in total
    pub fn extend_proposal_duration(ctx: Context<ExtendProposalDuration>, extra: i64) -> Result<()> {
        ctx.accounts.extend_proposal_duration(extra)
    }

    // Vote once per proposal
    // After the window elapsed this concludes the proposal instead
    pub fn cast_vote(ctx: Context<CastVote>, choice: VoteChoice) -> Result<()> {
        ctx.accounts.cast_vote(choice, &ctx.bumps)
    }

    // Anyone, once the voting window elapsed
    pub fn conclude_proposal(ctx: Context<ConcludeProposal>) -> Result<()> {
        ctx.accounts.conclude_proposal()
    }

    // Aggregate the candidacies of the last session
    // Candidacy proposals are passed as remaining accounts
    pub fn elect_delegate(ctx: Context<ElectDelegate>) -> Result<()> {
        let candidacies = ctx.remaining_accounts;
        ctx.accounts.elect_delegate(candidacies)
    }

    // ---------------------------------------------------------------
    // Treasury
    // ---------------------------------------------------------------

    // Destination of a passed simple proposal collects its allowance
    pub fn withdraw_from_internal_wallet(ctx: Context<WithdrawFromInternalWallet>) -> Result<()> {
        ctx.accounts.withdraw_from_internal_wallet()
    }

    pub fn deposit_funds(ctx: Context<DepositFunds>, amount: u64) -> Result<()> {
        ctx.accounts.deposit_funds(amount)
    }

    // (internal ledger, vault lamports above the rent floor)
    pub fn get_total_balance(ctx: Context<GetTotalBalance>) -> Result<TotalBalance> {
        ctx.accounts.get_total_balance()
    }
}
