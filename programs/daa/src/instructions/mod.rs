// Instructions module
// - initialize
// - request_membership
// - add_whitelister / remove_whitelister (delegate only)
// - whitelist_member (whitelisters only)
// - pay_membership / pay_new_membership_fee
// - leave_daa
// - remove_unpaid_member (whitelisters only)
// - set_annual_assembly_date / start / finish / cancel general assembly (delegate only)
// - create_proposal (all eight kinds)
// - extend_proposal_duration (simple proposals)
// - cast_vote (settles late proposals)
// - conclude_proposal
// - elect_delegate
// - withdraw_from_internal_wallet
// - deposit_funds / get_total_balance

pub mod add_whitelister;
pub mod cast_vote;
pub mod conclude_proposal;
pub mod create_proposal;
pub mod elect_delegate;
pub mod extend_proposal_duration;
pub mod general_assembly;
pub mod initialize;
pub mod leave_daa;
pub mod manage_treasury;
pub mod pay_membership;
pub mod remove_unpaid_member;
pub mod remove_whitelister;
pub mod request_membership;
pub mod whitelist_member;
pub mod withdraw_from_internal_wallet;

pub use add_whitelister::*;
pub use cast_vote::*;
pub use conclude_proposal::*;
pub use create_proposal::*;
pub use elect_delegate::*;
pub use extend_proposal_duration::*;
pub use general_assembly::*;
pub use initialize::*;
pub use leave_daa::*;
pub use manage_treasury::*;
pub use pay_membership::*;
pub use remove_unpaid_member::*;
pub use remove_whitelister::*;
pub use request_membership::*;
pub use whitelist_member::*;
pub use withdraw_from_internal_wallet::*;
