use anchor_lang::prelude::*;
use crate::{state::*, constants::*, events::*};

// Request Membership Instruction
//
// Opens a membership request for the signer. The request turns into a
// membership once two whitelisters approved it and the fee is paid.
// Former members can request again, pending requests cannot be renewed.

#[derive(Accounts)]
pub struct RequestMembership<'info> {
    #[account(mut)]
    pub requester: Signer<'info>,

    #[account(
        seeds = [
            ASSOCIATION,
            association.founder.as_ref(),
        ],
        bump = association.bump,
    )]
    pub association: Account<'info, Association>,

    // Member record of the requester
    // Created on first request, reused afterwards
    #[account(
        init_if_needed,
        payer = requester,
        space = ANCHOR_DISCRIMINATOR + Member::INIT_SPACE,
        seeds = [
            MEMBER,
            association.key().as_ref(),
            requester.key().as_ref(),
        ],
        bump,
    )]
    pub member: Account<'info, Member>,

    pub system_program: Program<'info, System>,
}

impl<'info> RequestMembership<'info> {
    pub fn request_membership(&mut self, bumps: &RequestMembershipBumps) -> Result<()> {
        self.association.require_open()?;

        let association = self.association.key();
        let now = Clock::get()?.unix_timestamp;

        self.member.bind(association, self.requester.key(), bumps.member);
        self.member.request(now)?;

        msg!(
            "Membership requested by {}, fee due before {}",
            self.member.address,
            self.member.fee_deadline
        );
        emit!(MembershipStatusChanged {
            association,
            address: self.member.address,
            role: self.member.role,
            approvals: self.member.approvals,
            has_paid: self.member.has_paid,
        });

        Ok(())
    }
}
