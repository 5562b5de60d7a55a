use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*};

// Elect Delegate Instruction
//
// Aggregates the delegate candidacies of the most recent assembly session,
// once that session is finished. Every candidacy of the session must be
// passed in remaining_accounts and must be concluded. Votes are summed per
// candidate:
// - unique leader with at least one vote becomes delegate,
//   the previous delegate becomes an ordinary member
// - tie or no votes: nothing changes, candidates can run again
//   at a later session
// - a winning whitelister the floor cannot spare stays whitelister,
//   the delegate is unchanged
//
// `elected` is the member record of the winner, only needed when the
// delegate actually changes.

#[derive(Accounts)]
pub struct ElectDelegate<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [
            ASSOCIATION,
            association.founder.as_ref(),
        ],
        bump = association.bump,
    )]
    pub association: Account<'info, Association>,

    #[account(
        seeds = [
            MEMBER,
            association.key().as_ref(),
            caller.key().as_ref(),
        ],
        bump = caller_member.bump,
    )]
    pub caller_member: Account<'info, Member>,

    #[account(
        mut,
        seeds = [
            MEMBER,
            association.key().as_ref(),
            association.delegate.as_ref(),
        ],
        bump = current_delegate.bump,
    )]
    pub current_delegate: Account<'info, Member>,

    #[account(
        mut,
        constraint = elected.association == association.key() @ DaaError::MemberMismatch,
    )]
    pub elected: Option<Account<'info, Member>>,
}

impl<'info> ElectDelegate<'info> {
    pub fn elect_delegate(&mut self, candidacies: &[AccountInfo]) -> Result<()> {
        // SECURITY CHECKS

        // 1. Association still operating
        self.association.require_open()?;

        // 2. Caller is a member
        require!(self.caller_member.role.is_member(), DaaError::NotAMember);

        // 3. A session took place and is over
        let session = self
            .association
            .schedule
            .last_session
            .ok_or(DaaError::NoAssemblyInSession)?;
        require!(
            !self.association.schedule.is_in_session(),
            DaaError::AssemblyInSession
        );

        // 4. Candidacy accounts are proposals of this program
        let mut proposals: Vec<Proposal> = Vec::with_capacity(candidacies.len());
        for info in candidacies {
            require_keys_eq!(*info.owner, crate::ID, DaaError::ProposalMismatch);
            let data = info.try_borrow_data()?;
            proposals.push(Proposal::try_deserialize(&mut &data[..])?);
        }

        // 5. Complete, concluded candidacy set of this association and session
        let association_key = self.association.key();
        let tallies = collect_candidacies(
            &proposals,
            &association_key,
            session,
            self.association.schedule.session_candidacies,
        )?;

        let winner = match tally_election(&tallies) {
            ElectionOutcome::Elected(winner) => winner,
            ElectionOutcome::NoWinner => {
                msg!("No delegate elected in session {}", session);
                return Ok(());
            }
        };
        if self.association.is_delegate(&winner) {
            msg!("{} stays delegate", winner);
            return Ok(());
        }

        // 6. Promote the winner
        let previous = self.association.delegate;
        let elected = self
            .elected
            .as_mut()
            .ok_or(DaaError::OptionalAccountNotProvided)?;
        require_keys_eq!(elected.address, winner, DaaError::MemberMismatch);
        if !elected.promote_to_delegate(&mut self.current_delegate, &mut self.association)? {
            msg!(
                "{} won session {} but is one of the last two whitelisters, delegate unchanged",
                winner,
                session
            );
            return Ok(());
        }

        msg!("{} elected delegate, replacing {}", winner, previous);
        emit!(DelegateElected {
            association: association_key,
            previous,
            delegate: winner,
            session,
        });

        Ok(())
    }
}
