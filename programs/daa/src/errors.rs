use anchor_lang::prelude::*;

#[error_code]
pub enum DaaError {
    // Authorization errors
    #[msg("Signer is not a member of this association")]
    NotAMember,

    #[msg("Only the delegate can perform this action")]
    OnlyDelegate,

    #[msg("Only a whitelister can perform this action")]
    OnlyWhitelister,

    #[msg("Only the proposal submitter can perform this action")]
    NotSubmitter,

    #[msg("Only the proposal destination can withdraw its allowance")]
    NotDestination,

    #[msg("The delegate cannot leave the association")]
    DelegateCannotLeave,

    // Assembly and proposal state errors
    #[msg("No general assembly is in session")]
    NoAssemblyInSession,

    #[msg("Discharge requires an annual general assembly in session")]
    NotAnnualAssembly,

    #[msg("A general assembly is already in session")]
    AssemblyInSession,

    #[msg("General assembly is not scheduled")]
    AssemblyNotScheduled,

    #[msg("General assembly date has not been reached")]
    AssemblyDateNotReached,

    #[msg("Assembly date is closer than the required lead time")]
    AssemblyDateTooSoon,

    #[msg("Assembly date is beyond the scheduling horizon")]
    AssemblyDateTooFar,

    #[msg("Annual assembly cannot be set within nine months of the last one")]
    AssemblyBlackout,

    #[msg("No free slot to schedule another general assembly")]
    AssemblyScheduleFull,

    #[msg("Proposal has already been concluded")]
    ProposalConcluded,

    #[msg("Voting window is still open")]
    VotingStillOpen,

    #[msg("Voting window has closed")]
    VotingClosed,

    #[msg("Proposal did not pass")]
    ProposalRejected,

    #[msg("Only simple proposals can be extended or withdrawn")]
    NotSimpleProposal,

    #[msg("Membership has already been requested")]
    AlreadyRequested,

    #[msg("Account has no pending membership request")]
    MembershipNotRequested,

    #[msg("Membership fee has already been paid")]
    AlreadyPaid,

    #[msg("Membership fee deadline has not passed")]
    FeeDeadlineNotReached,

    #[msg("Account needs approval from two whitelisters first")]
    NotWhitelisted,

    #[msg("Candidacies of the last session are not all concluded")]
    ElectionStillOpen,

    #[msg("Association has been dissolved or moved to a successor")]
    AssociationClosed,

    // Invariant errors
    #[msg("Address is already a member")]
    AlreadyMember,

    #[msg("At least two whitelisters must remain")]
    WhitelisterFloor,

    #[msg("Address is already a whitelister")]
    AlreadyWhitelister,

    #[msg("Address is not a whitelister")]
    NotAWhitelister,

    #[msg("The delegate role cannot be changed this way")]
    DelegateRoleLocked,

    #[msg("Whitelister already approved this address")]
    AlreadyApproved,

    #[msg("Address is already approved by two whitelisters")]
    ApprovalsComplete,

    #[msg("Address has already voted on this proposal")]
    AlreadyVoted,

    #[msg("Member already backed a delegate candidate in this session")]
    AlreadyVotedForDelegate,

    #[msg("Vote choice is not allowed for this proposal")]
    InvalidVoteChoice,

    #[msg("Address must not be the zero address")]
    ZeroAddress,

    #[msg("Statutes hash must not be empty")]
    EmptyStatutesHash,

    #[msg("Proposal name must be between 1 and 32 bytes")]
    InvalidName,

    #[msg("Proposal duration must be positive and at most 60 days in total")]
    InvalidDuration,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Allowance has already been withdrawn")]
    AlreadyWithdrawn,

    #[msg("Recipient must be writable, system-owned and match the proposal")]
    InvalidRecipient,

    #[msg("The delegate cannot be expelled")]
    CannotExpelDelegate,

    #[msg("Invalid association configuration")]
    InvalidConfig,

    #[msg("Candidacy list contains a duplicate proposal")]
    DuplicateCandidacy,

    #[msg("Arithmetic overflow")]
    Overflow,

    // Value errors
    #[msg("Payment is below the membership fee")]
    InsufficientPayment,

    #[msg("Insufficient funds in the treasury")]
    InsufficientFunds,

    // Lookup errors
    #[msg("Member record does not match the expected address")]
    MemberMismatch,

    #[msg("Proposal does not belong to this association or has the wrong kind")]
    ProposalMismatch,

    #[msg("No general assembly with this index")]
    AssemblyNotFound,

    #[msg("Optional account required to settle this proposal was not provided")]
    OptionalAccountNotProvided,
}

// Coarse classification of failures, used by clients to decide how to react
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Authorization,
    StateGate,
    InvariantViolation,
    InsufficientValue,
    NotFound,
}

impl DaaError {
    pub fn kind(&self) -> ErrorKind {
        use DaaError::*;
        match self {
            NotAMember | OnlyDelegate | OnlyWhitelister | NotSubmitter | NotDestination
            | DelegateCannotLeave => ErrorKind::Authorization,

            NoAssemblyInSession | NotAnnualAssembly | AssemblyInSession
            | AssemblyNotScheduled | AssemblyDateNotReached | AssemblyDateTooSoon | AssemblyDateTooFar
            | AssemblyBlackout | AssemblyScheduleFull | ProposalConcluded | VotingStillOpen
            | VotingClosed | ProposalRejected | NotSimpleProposal | AlreadyRequested
            | MembershipNotRequested | AlreadyPaid | FeeDeadlineNotReached | NotWhitelisted
            | ElectionStillOpen | AssociationClosed => ErrorKind::StateGate,

            AlreadyMember | WhitelisterFloor | AlreadyWhitelister | NotAWhitelister
            | DelegateRoleLocked | AlreadyApproved | ApprovalsComplete | AlreadyVoted
            | AlreadyVotedForDelegate | InvalidVoteChoice | ZeroAddress | EmptyStatutesHash
            | InvalidName | InvalidDuration | InvalidAmount | AlreadyWithdrawn
            | InvalidRecipient | CannotExpelDelegate | InvalidConfig | DuplicateCandidacy
            | Overflow => ErrorKind::InvariantViolation,

            InsufficientPayment | InsufficientFunds => ErrorKind::InsufficientValue,

            MemberMismatch | ProposalMismatch | AssemblyNotFound
            | OptionalAccountNotProvided => ErrorKind::NotFound,
        }
    }
}

#[cfg(test)]
pub(crate) fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: DaaError) {
    match result {
        Err(anchor_lang::error::Error::AnchorError(e)) => {
            assert_eq!(e.error_code_number, u32::from(expected), "{}", e.error_msg)
        }
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
