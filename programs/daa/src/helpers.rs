use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use crate::{constants::*, errors::DaaError, events::*, state::*};

// Move lamports from a signer into the vault
pub fn deposit_to_vault<'info>(
    system_program: &Program<'info, System>,
    from: AccountInfo<'info>,
    vault: &SystemAccount<'info>,
    amount: u64,
) -> Result<()> {
    let cpi_context = CpiContext::new(
        system_program.to_account_info(),
        Transfer {
            from,
            to: vault.to_account_info(),
        },
    );
    transfer(cpi_context, amount)
}

// Move lamports out of the vault, signed with the vault seeds
pub fn pay_from_vault<'info>(
    system_program: &Program<'info, System>,
    vault: &SystemAccount<'info>,
    to: AccountInfo<'info>,
    association: &Pubkey,
    vault_bump: u8,
    amount: u64,
) -> Result<()> {
    let vault_seeds = &[VAULT, association.as_ref(), &[vault_bump]];
    let signer_seeds = &[&vault_seeds[..]];

    let cpi_context = CpiContext::new_with_signer(
        system_program.to_account_info(),
        Transfer {
            from: vault.to_account_info(),
            to,
        },
        signer_seeds,
    );
    transfer(cpi_context, amount)
}

// Recipients must be writable, system-owned and the address named by the proposal
pub fn validate_recipient(recipient: &AccountInfo, expected: &Pubkey) -> Result<()> {
    require!(recipient.is_writable, DaaError::InvalidRecipient);
    require!(
        recipient.owner == &anchor_lang::system_program::ID,
        DaaError::InvalidRecipient
    );
    require_keys_eq!(recipient.key(), *expected, DaaError::InvalidRecipient);
    Ok(())
}

// Conclude a proposal and apply everything its outcome implies
// Shared by conclude_proposal and the lazy path of cast_vote
pub fn settle_proposal<'info>(
    association: &mut Account<'info, Association>,
    proposal: &mut Account<'info, Proposal>,
    vault: &SystemAccount<'info>,
    recipient: Option<&UncheckedAccount<'info>>,
    subject_member: Option<&mut Account<'info, Member>>,
    system_program: &Program<'info, System>,
    now: i64,
) -> Result<Settlement> {
    let association_key = association.key();
    let settlement = proposal.conclude(association.headcount, now)?;

    match settlement {
        Settlement::Expel { member } => {
            let subject = subject_member.ok_or(DaaError::OptionalAccountNotProvided)?;
            if subject.settle_expulsion(&member, association)? {
                msg!("Member {} expelled", member);
                emit!(MembershipStatusChanged {
                    association: association_key,
                    address: member,
                    role: subject.role,
                    approvals: subject.approvals,
                    has_paid: subject.has_paid,
                });
            } else {
                msg!("Expulsion of {} skipped, member is protected", member);
            }
        }
        Settlement::Dissolve { beneficiary }
        | Settlement::TransferToSuccessor { new_organization: beneficiary } => {
            let recipient = recipient.ok_or(DaaError::OptionalAccountNotProvided)?;
            validate_recipient(&recipient.to_account_info(), &beneficiary)?;

            association.apply_settlement(&settlement)?;
            let amount = vault.lamports();
            pay_from_vault(
                system_program,
                vault,
                recipient.to_account_info(),
                &association_key,
                association.vault_bump,
                amount,
            )?;
            msg!("Association closed, {} lamports sent to {}", amount, beneficiary);
            emit!(FundsDisbursed {
                association: association_key,
                recipient: beneficiary,
                amount,
            });
        }
        Settlement::ScheduleAssembly { date } => {
            association.apply_settlement(&settlement)?;
            emit!(AssemblyScheduled {
                association: association_key,
                index: association.schedule.assembly_count - 1,
                date,
                annual: false,
            });
        }
        Settlement::Recorded
        | Settlement::GrantAllowance { .. }
        | Settlement::AdoptStatutes { .. } => association.apply_settlement(&settlement)?,
    }

    emit!(ProposalConcluded {
        association: association_key,
        proposal: proposal.key(),
        kind: proposal.kind,
        id: proposal.id,
        result: proposal.result,
        votes_for: proposal.votes_for,
        votes_against: proposal.votes_against,
        votes_abstain: proposal.votes_abstain,
    });
    Ok(settlement)
}
