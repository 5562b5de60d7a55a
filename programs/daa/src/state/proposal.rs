use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::DaaError,
    state::{AssemblySchedule, Association, Member, MemberRole, VoteChoice},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum ProposalKind {
    #[default]
    Simple,
    DelegateCandidacy,
    ChangeStatutes,
    Dissolution,
    UpdateOrganization,
    Discharge,
    ExpelMember,
    AssemblyDate,
}

impl ProposalKind {
    pub fn voting_rule(&self) -> VotingRule {
        match self {
            ProposalKind::ChangeStatutes
            | ProposalKind::Dissolution
            | ProposalKind::UpdateOrganization => VotingRule::TwoThirds,
            ProposalKind::ExpelMember => VotingRule::ExpelQuorum,
            ProposalKind::Simple
            | ProposalKind::DelegateCandidacy
            | ProposalKind::Discharge
            | ProposalKind::AssemblyDate => VotingRule::SimpleMajority,
        }
    }
}

// How the votes of a concluded proposal are turned into a result
// Every rule needs more votes for than against, so no votes means rejection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VotingRule {
    SimpleMajority,
    // Statutes, dissolution and organization changes
    TwoThirds,
    // At least 10% of members took part and two thirds of the cast votes are in favor
    ExpelQuorum,
}

impl VotingRule {
    pub fn passes(&self, votes_for: u64, votes_against: u64, votes_abstain: u64, headcount: u64) -> bool {
        if votes_for <= votes_against {
            return false;
        }
        let cast = votes_for as u128 + votes_against as u128;
        match self {
            VotingRule::SimpleMajority => true,
            VotingRule::TwoThirds => votes_for as u128 * 3 > cast * 2,
            VotingRule::ExpelQuorum => {
                let participants = cast + votes_abstain as u128;
                participants * 100 >= headcount as u128 * EXPEL_PARTICIPATION_PERCENT as u128
                    && votes_for as u128 * 3 >= cast * 2
            }
        }
    }
}

// Submission arguments, one variant per proposal kind
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum ProposalRequest {
    // Spend `amount` from the treasury for `destination`
    Simple {
        name: String,
        amount: u64,
        destination: Pubkey,
        duration: i64,
    },

    // Submitter stands for delegate in the running session
    DelegateCandidacy,

    ChangeStatutes { statutes_hash: [u8; 32] },

    // Hand the whole treasury to `beneficiary` and close the association
    Dissolution { beneficiary: Pubkey },

    // Move the whole treasury to a successor organization
    UpdateOrganization { new_organization: Pubkey },

    // Delegate asks the annual assembly to approve their term
    Discharge,

    ExpelMember { member: Pubkey },

    // Schedule an extraordinary assembly
    AssemblyDate { date: i64 },
}

// Kind specific data stored with the proposal
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum ProposalPayload {
    Simple {
        name: [u8; MAX_PROPOSAL_NAME_LEN],
        amount: u64,
        destination: Pubkey,
        withdrawn: bool,
    },
    DelegateCandidacy { candidate: Pubkey, session: u64 },
    ChangeStatutes { statutes_hash: [u8; 32] },
    Dissolution { beneficiary: Pubkey },
    UpdateOrganization { new_organization: Pubkey },
    Discharge { session: u64 },
    ExpelMember { member: Pubkey },
    AssemblyDate { date: i64 },
}

impl Default for ProposalPayload {
    fn default() -> Self {
        ProposalPayload::AssemblyDate { date: 0 }
    }
}

impl ProposalPayload {
    pub fn kind(&self) -> ProposalKind {
        match self {
            ProposalPayload::Simple { .. } => ProposalKind::Simple,
            ProposalPayload::DelegateCandidacy { .. } => ProposalKind::DelegateCandidacy,
            ProposalPayload::ChangeStatutes { .. } => ProposalKind::ChangeStatutes,
            ProposalPayload::Dissolution { .. } => ProposalKind::Dissolution,
            ProposalPayload::UpdateOrganization { .. } => ProposalKind::UpdateOrganization,
            ProposalPayload::Discharge { .. } => ProposalKind::Discharge,
            ProposalPayload::ExpelMember { .. } => ProposalKind::ExpelMember,
            ProposalPayload::AssemblyDate { .. } => ProposalKind::AssemblyDate,
        }
    }

    // Address that receives funds or is affected by the outcome
    pub fn destination(&self) -> Pubkey {
        match *self {
            ProposalPayload::Simple { destination, .. } => destination,
            ProposalPayload::DelegateCandidacy { candidate, .. } => candidate,
            ProposalPayload::Dissolution { beneficiary } => beneficiary,
            ProposalPayload::UpdateOrganization { new_organization } => new_organization,
            ProposalPayload::ExpelMember { member } => member,
            ProposalPayload::ChangeStatutes { .. }
            | ProposalPayload::Discharge { .. }
            | ProposalPayload::AssemblyDate { .. } => Pubkey::default(),
        }
    }
}

fn encode_name(name: &str) -> Result<[u8; MAX_PROPOSAL_NAME_LEN]> {
    let bytes = name.as_bytes();
    require!(
        !bytes.is_empty() && bytes.len() <= MAX_PROPOSAL_NAME_LEN,
        DaaError::InvalidName
    );
    let mut encoded = [0u8; MAX_PROPOSAL_NAME_LEN];
    encoded[..bytes.len()].copy_from_slice(bytes);
    Ok(encoded)
}

impl ProposalRequest {
    pub fn kind(&self) -> ProposalKind {
        match self {
            ProposalRequest::Simple { .. } => ProposalKind::Simple,
            ProposalRequest::DelegateCandidacy => ProposalKind::DelegateCandidacy,
            ProposalRequest::ChangeStatutes { .. } => ProposalKind::ChangeStatutes,
            ProposalRequest::Dissolution { .. } => ProposalKind::Dissolution,
            ProposalRequest::UpdateOrganization { .. } => ProposalKind::UpdateOrganization,
            ProposalRequest::Discharge => ProposalKind::Discharge,
            ProposalRequest::ExpelMember { .. } => ProposalKind::ExpelMember,
            ProposalRequest::AssemblyDate { .. } => ProposalKind::AssemblyDate,
        }
    }

    // Check eligibility and assembly gates, returns the payload and voting window
    // `subject` is the member record of an expulsion target
    pub fn admit(
        &self,
        association: &mut Association,
        submitter: &Member,
        subject: Option<&Member>,
        now: i64,
    ) -> Result<(ProposalPayload, i64)> {
        require!(submitter.role.is_member(), DaaError::NotAMember);
        let session_window = association.config.ga_voting_window;

        match self {
            ProposalRequest::Simple { name, amount, destination, duration } => {
                let name = encode_name(name)?;
                require!(*amount > 0, DaaError::InvalidAmount);
                require_keys_neq!(*destination, Pubkey::default(), DaaError::ZeroAddress);
                require!(
                    *duration > 0 && *duration <= MAX_PROPOSAL_DURATION,
                    DaaError::InvalidDuration
                );
                Ok((
                    ProposalPayload::Simple {
                        name,
                        amount: *amount,
                        destination: *destination,
                        withdrawn: false,
                    },
                    *duration,
                ))
            }
            ProposalRequest::DelegateCandidacy => {
                let session = association.schedule.record_candidacy()?;
                Ok((
                    ProposalPayload::DelegateCandidacy { candidate: submitter.address, session },
                    session_window,
                ))
            }
            ProposalRequest::ChangeStatutes { statutes_hash } => {
                association.schedule.require_session()?;
                require!(*statutes_hash != [0u8; 32], DaaError::EmptyStatutesHash);
                Ok((
                    ProposalPayload::ChangeStatutes { statutes_hash: *statutes_hash },
                    session_window,
                ))
            }
            ProposalRequest::Dissolution { beneficiary } => {
                association.schedule.require_session()?;
                require_keys_neq!(*beneficiary, Pubkey::default(), DaaError::ZeroAddress);
                Ok((
                    ProposalPayload::Dissolution { beneficiary: *beneficiary },
                    session_window,
                ))
            }
            ProposalRequest::UpdateOrganization { new_organization } => {
                association.schedule.require_session()?;
                require_keys_neq!(*new_organization, Pubkey::default(), DaaError::ZeroAddress);
                Ok((
                    ProposalPayload::UpdateOrganization { new_organization: *new_organization },
                    session_window,
                ))
            }
            ProposalRequest::Discharge => {
                require!(association.is_delegate(&submitter.address), DaaError::OnlyDelegate);
                let session = association.schedule.require_annual_session()?;
                Ok((ProposalPayload::Discharge { session }, session_window))
            }
            ProposalRequest::ExpelMember { member } => {
                require_keys_neq!(*member, Pubkey::default(), DaaError::ZeroAddress);
                let subject = subject.ok_or(DaaError::OptionalAccountNotProvided)?;
                require_keys_eq!(subject.address, *member, DaaError::MemberMismatch);
                require!(subject.role.is_member(), DaaError::NotAMember);
                require!(
                    subject.role != MemberRole::Delegate,
                    DaaError::CannotExpelDelegate
                );
                Ok((ProposalPayload::ExpelMember { member: *member }, EXPEL_VOTING_PERIOD))
            }
            ProposalRequest::AssemblyDate { date } => {
                AssemblySchedule::validate_date_range(
                    *date,
                    now,
                    association.config.ga_proposal_lead_time,
                )?;
                Ok((ProposalPayload::AssemblyDate { date: *date }, ASSEMBLY_DATE_VOTING_PERIOD))
            }
        }
    }
}

// What a concluded proposal changes
// Applied by the association and the concluding instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    // Result only, nothing else changes
    Recorded,
    GrantAllowance { destination: Pubkey, amount: u64 },
    AdoptStatutes { statutes_hash: [u8; 32] },
    Dissolve { beneficiary: Pubkey },
    TransferToSuccessor { new_organization: Pubkey },
    Expel { member: Pubkey },
    ScheduleAssembly { date: i64 },
}

// Proposal account
#[account]
#[derive(InitSpace, Default)]
pub struct Proposal {
    // The association this proposal belongs to
    pub association: Pubkey,

    pub kind: ProposalKind,

    // Sequential number within its kind
    pub id: u64,

    pub submitter: Pubkey,

    // Recipient or affected address, zero when the kind has none
    pub destination: Pubkey,

    pub payload: ProposalPayload,

    pub start_time: i64,

    // Voting window in seconds, counted from start_time
    pub duration: i64,

    pub votes_for: u64,
    pub votes_against: u64,
    pub votes_abstain: u64,

    pub concluded: bool,
    pub result: bool,
    pub concluded_at: i64,

    // PDA bump seed
    pub bump: u8,
}

impl Proposal {
    pub fn open(
        association: Pubkey,
        id: u64,
        submitter: Pubkey,
        payload: ProposalPayload,
        duration: i64,
        now: i64,
        bump: u8,
    ) -> Self {
        Proposal {
            association,
            kind: payload.kind(),
            id,
            submitter,
            destination: payload.destination(),
            payload,
            start_time: now,
            duration,
            bump,
            ..Proposal::default()
        }
    }

    pub fn deadline(&self) -> i64 {
        self.start_time.saturating_add(self.duration)
    }

    pub fn window_elapsed(&self, now: i64) -> bool {
        now > self.deadline()
    }

    // Lazy settlement: a vote arriving after the window concludes instead
    pub fn due_for_settlement(&self, now: i64) -> bool {
        !self.concluded && self.window_elapsed(now)
    }

    pub fn total_votes(&self) -> u64 {
        self.votes_for
            .saturating_add(self.votes_against)
            .saturating_add(self.votes_abstain)
    }

    // (candidate, session) of a delegate candidacy
    pub fn candidacy(&self) -> Option<(Pubkey, u64)> {
        match self.payload {
            ProposalPayload::DelegateCandidacy { candidate, session } => Some((candidate, session)),
            _ => None,
        }
    }

    pub fn cast_vote(&mut self, choice: VoteChoice, now: i64) -> Result<()> {
        require!(!self.concluded, DaaError::ProposalConcluded);
        require!(!self.window_elapsed(now), DaaError::VotingClosed);
        if self.kind == ProposalKind::DelegateCandidacy {
            require!(choice == VoteChoice::For, DaaError::InvalidVoteChoice);
        }

        let tally = match choice {
            VoteChoice::For => &mut self.votes_for,
            VoteChoice::Against => &mut self.votes_against,
            VoteChoice::Abstain => &mut self.votes_abstain,
        };
        *tally = tally.checked_add(1).ok_or(DaaError::Overflow)?;
        Ok(())
    }

    pub fn extend(&mut self, caller: &Pubkey, extra: i64, now: i64) -> Result<()> {
        require!(self.kind == ProposalKind::Simple, DaaError::NotSimpleProposal);
        require_keys_eq!(*caller, self.submitter, DaaError::NotSubmitter);
        require!(!self.concluded, DaaError::ProposalConcluded);
        require!(!self.window_elapsed(now), DaaError::VotingClosed);

        let total = self.duration.checked_add(extra).ok_or(DaaError::Overflow)?;
        require!(
            extra > 0 && total <= MAX_PROPOSAL_DURATION,
            DaaError::InvalidDuration
        );
        self.duration = total;
        Ok(())
    }

    // Close voting and compute the result, exactly once
    pub fn conclude(&mut self, headcount: u64, now: i64) -> Result<Settlement> {
        require!(!self.concluded, DaaError::ProposalConcluded);
        require!(self.window_elapsed(now), DaaError::VotingStillOpen);

        self.concluded = true;
        self.concluded_at = now;
        self.result = self.kind.voting_rule().passes(
            self.votes_for,
            self.votes_against,
            self.votes_abstain,
            headcount,
        );
        Ok(self.settlement())
    }

    pub fn settlement(&self) -> Settlement {
        if !self.concluded || !self.result {
            return Settlement::Recorded;
        }
        match self.payload {
            ProposalPayload::Simple { amount, destination, .. } => {
                Settlement::GrantAllowance { destination, amount }
            }
            ProposalPayload::ChangeStatutes { statutes_hash } => {
                Settlement::AdoptStatutes { statutes_hash }
            }
            ProposalPayload::Dissolution { beneficiary } => Settlement::Dissolve { beneficiary },
            ProposalPayload::UpdateOrganization { new_organization } => {
                Settlement::TransferToSuccessor { new_organization }
            }
            ProposalPayload::ExpelMember { member } => Settlement::Expel { member },
            ProposalPayload::AssemblyDate { date } => Settlement::ScheduleAssembly { date },
            ProposalPayload::DelegateCandidacy { .. } | ProposalPayload::Discharge { .. } => {
                Settlement::Recorded
            }
        }
    }

    // Mark the allowance of a passed simple proposal as paid, returns the amount
    pub fn claim_allowance(&mut self, caller: &Pubkey) -> Result<u64> {
        let (concluded, result) = (self.concluded, self.result);
        match &mut self.payload {
            ProposalPayload::Simple { amount, destination, withdrawn, .. } => {
                require!(concluded, DaaError::VotingStillOpen);
                require!(result, DaaError::ProposalRejected);
                require_keys_eq!(*caller, *destination, DaaError::NotDestination);
                require!(!*withdrawn, DaaError::AlreadyWithdrawn);
                *withdrawn = true;
                Ok(*amount)
            }
            _ => err!(DaaError::NotSimpleProposal),
        }
    }
}
