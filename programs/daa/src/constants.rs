use anchor_lang::prelude::*;

// Anchor account discriminator size
pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Association account
// Seeds: ["association", founder]
pub const ASSOCIATION: &[u8] = b"association";

// Member record per address
// Seeds: ["member", association, address]
pub const MEMBER: &[u8] = b"member";

// Vault PDA that holds the treasury lamports
// Seeds: ["vault", association]
pub const VAULT: &[u8] = b"vault";

// Proposal account
// Seeds: ["proposal", association, kind, id]
pub const PROPOSAL: &[u8] = b"proposal";

// One vote record per (proposal, voter)
// Seeds: ["vote", proposal, voter]
pub const VOTE_RECORD: &[u8] = b"vote";

pub const DAY: i64 = 24 * 60 * 60;

// Membership
pub const MIN_WHITELISTERS: u32 = 2;
pub const REQUIRED_APPROVALS: u8 = 2;

// Requests that stay unpaid for longer can be removed by any whitelister
#[constant]
pub const MEMBERSHIP_FEE_DEADLINE: i64 = 365 * DAY;

// Voting windows
#[constant]
pub const MAX_PROPOSAL_DURATION: i64 = 60 * DAY;
#[constant]
pub const ASSEMBLY_DATE_VOTING_PERIOD: i64 = 14 * DAY;
#[constant]
pub const EXPEL_VOTING_PERIOD: i64 = 7 * DAY;

// Expulsion needs at least this share of all members to take part
pub const EXPEL_PARTICIPATION_PERCENT: u64 = 10;

// No annual assembly may be set within nine months of the last assembly
#[constant]
pub const ANNUAL_ASSEMBLY_BLACKOUT: i64 = 274 * DAY;

// Assemblies cannot be scheduled further ahead than this
#[constant]
pub const MAX_ASSEMBLY_HORIZON: i64 = 365 * DAY;

// Scheduled or running assemblies tracked at once, finished and cancelled slots are reused
pub const MAX_SCHEDULED_ASSEMBLIES: usize = 8;

pub const PROPOSAL_KIND_COUNT: usize = 8;
pub const MAX_PROPOSAL_NAME_LEN: usize = 32;

// AssociationConfig defaults
pub const DEFAULT_GA_VOTING_WINDOW: i64 = 10 * 60;
pub const DEFAULT_GA_PROPOSAL_LEAD_TIME: i64 = 30 * DAY;
