use anchor_lang::prelude::*;
use crate::{constants::*, errors::DaaError, state::Association};

// Role of an address inside the association
//
// NotMember: no rights (also the state of a pending request)
// ExistingMember: full member, may propose and vote
// Delegate: exactly one at any time, runs general assemblies
// Whitelister: member who approves membership requests, never fewer than two
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum MemberRole {
    #[default]
    NotMember,
    ExistingMember,
    Delegate,
    Whitelister,
}

impl MemberRole {
    pub fn is_member(&self) -> bool {
        !matches!(self, MemberRole::NotMember)
    }
}

// Membership record, one PDA per (association, address)
#[account]
#[derive(InitSpace, Default)]
pub struct Member {
    // Association this record belongs to
    pub association: Pubkey,

    // Address the record describes
    pub address: Pubkey,

    pub role: MemberRole,

    // Pending membership request
    pub requested: bool,

    // Whitelisters that approved the pending request
    pub approvers: [Pubkey; 2],
    pub approvals: u8,

    pub has_paid: bool,

    pub requested_at: i64,

    // Unpaid requests can be removed after this timestamp
    pub fee_deadline: i64,

    pub joined_at: i64,

    // Last assembly session in which this member backed a delegate candidate
    pub delegate_vote_session: Option<u64>,

    // PDA bump seed
    pub bump: u8,
}

impl Member {
    pub fn is_bound(&self) -> bool {
        self.address != Pubkey::default()
    }

    // Attach a freshly created record to its association and address
    pub fn bind(&mut self, association: Pubkey, address: Pubkey, bump: u8) {
        if !self.is_bound() {
            self.association = association;
            self.address = address;
            self.bump = bump;
        }
    }

    // Seed a role directly, used for the founding delegate and whitelisters
    pub fn seed(&mut self, association: Pubkey, address: Pubkey, role: MemberRole, now: i64, bump: u8) {
        self.bind(association, address, bump);
        self.role = role;
        self.has_paid = true;
        self.joined_at = now;
    }

    // (role, approvals, has_paid)
    pub fn status(&self) -> (MemberRole, u8, bool) {
        (self.role, self.approvals, self.has_paid)
    }

    pub fn has_approved(&self, whitelister: &Pubkey) -> bool {
        self.approvers
            .iter()
            .take(self.approvals as usize)
            .any(|approver| approver == whitelister)
    }

    pub fn request(&mut self, now: i64) -> Result<()> {
        require!(!self.role.is_member(), DaaError::AlreadyMember);
        require!(!self.requested, DaaError::AlreadyRequested);

        self.clear();
        self.requested = true;
        self.requested_at = now;
        self.fee_deadline = now
            .checked_add(MEMBERSHIP_FEE_DEADLINE)
            .ok_or(DaaError::Overflow)?;
        Ok(())
    }

    // Record a whitelister approval, returns true when the request got promoted
    pub fn approve(&mut self, whitelister: Pubkey, association: &mut Association, now: i64) -> Result<bool> {
        require!(self.requested, DaaError::MembershipNotRequested);
        require!(self.approvals < REQUIRED_APPROVALS, DaaError::ApprovalsComplete);
        require!(!self.has_approved(&whitelister), DaaError::AlreadyApproved);

        self.approvers[self.approvals as usize] = whitelister;
        self.approvals += 1;
        self.try_promote(association, now)
    }

    // Record the membership payment, returns true when the request got promoted
    // `strict` requires both approvals before paying
    pub fn pay(&mut self, association: &mut Association, strict: bool, now: i64) -> Result<bool> {
        require!(self.requested, DaaError::MembershipNotRequested);
        require!(!self.has_paid, DaaError::AlreadyPaid);
        if strict {
            require!(self.approvals >= REQUIRED_APPROVALS, DaaError::NotWhitelisted);
        }

        self.has_paid = true;
        self.try_promote(association, now)
    }

    fn try_promote(&mut self, association: &mut Association, now: i64) -> Result<bool> {
        if self.approvals < REQUIRED_APPROVALS || !self.has_paid {
            return Ok(false);
        }
        association.admit_member()?;
        self.role = MemberRole::ExistingMember;
        self.requested = false;
        self.joined_at = now;
        Ok(true)
    }

    pub fn leave(&mut self, association: &mut Association) -> Result<()> {
        match self.role {
            MemberRole::NotMember => return err!(DaaError::NotAMember),
            MemberRole::Delegate => return err!(DaaError::DelegateCannotLeave),
            MemberRole::Whitelister => association.release_whitelister()?,
            MemberRole::ExistingMember => {}
        }
        association.drop_member()?;
        self.clear();
        Ok(())
    }

    // Drop a whitelisted request whose fee stayed unpaid past the deadline
    pub fn expire_unpaid(&mut self, now: i64) -> Result<()> {
        require!(self.requested, DaaError::MembershipNotRequested);
        require!(!self.has_paid, DaaError::AlreadyPaid);
        require!(self.approvals >= REQUIRED_APPROVALS, DaaError::NotWhitelisted);
        require!(now > self.fee_deadline, DaaError::FeeDeadlineNotReached);

        self.clear();
        Ok(())
    }

    pub fn grant_whitelister(&mut self, association: &mut Association, now: i64) -> Result<()> {
        match self.role {
            MemberRole::Whitelister => return err!(DaaError::AlreadyWhitelister),
            MemberRole::Delegate => return err!(DaaError::DelegateRoleLocked),
            MemberRole::NotMember => {
                association.admit_member()?;
                self.clear();
                self.has_paid = true;
                self.joined_at = now;
            }
            MemberRole::ExistingMember => {}
        }
        association.add_whitelister()?;
        self.role = MemberRole::Whitelister;
        Ok(())
    }

    pub fn revoke_whitelister(&mut self, association: &mut Association) -> Result<()> {
        require!(self.role == MemberRole::Whitelister, DaaError::NotAWhitelister);

        association.release_whitelister()?;
        association.drop_member()?;
        self.clear();
        Ok(())
    }

    // Outcome of a passed expulsion, returns false when the target is protected
    pub fn expel(&mut self, association: &mut Association) -> Result<bool> {
        match self.role {
            MemberRole::Delegate => return Ok(false),
            MemberRole::Whitelister => {
                if !association.can_release_whitelister() {
                    return Ok(false);
                }
                association.release_whitelister()?;
                association.drop_member()?;
            }
            MemberRole::ExistingMember => association.drop_member()?,
            MemberRole::NotMember => {}
        }
        self.clear();
        Ok(true)
    }

    // Expulsion of `target` decided by a proposal, this record must describe it
    pub fn settle_expulsion(&mut self, target: &Pubkey, association: &mut Association) -> Result<bool> {
        require_keys_eq!(self.address, *target, DaaError::MemberMismatch);
        self.expel(association)
    }

    // Returns false when the winner is a whitelister the floor cannot spare
    pub fn promote_to_delegate(&mut self, previous: &mut Member, association: &mut Association) -> Result<bool> {
        require!(self.role.is_member(), DaaError::NotAMember);
        require_keys_eq!(previous.address, association.delegate, DaaError::MemberMismatch);

        if self.role == MemberRole::Whitelister {
            if !association.can_release_whitelister() {
                return Ok(false);
            }
            association.release_whitelister()?;
        }
        previous.role = MemberRole::ExistingMember;
        self.role = MemberRole::Delegate;
        association.delegate = self.address;
        Ok(true)
    }

    pub fn record_delegate_vote(&mut self, session: u64) -> Result<()> {
        require!(
            self.delegate_vote_session != Some(session),
            DaaError::AlreadyVotedForDelegate
        );
        self.delegate_vote_session = Some(session);
        Ok(())
    }

    // Back to NotMember, keeps identity and bump
    fn clear(&mut self) {
        self.role = MemberRole::NotMember;
        self.requested = false;
        self.approvers = [Pubkey::default(); 2];
        self.approvals = 0;
        self.has_paid = false;
        self.requested_at = 0;
        self.fee_deadline = 0;
        self.joined_at = 0;
    }
}
