use anchor_lang::prelude::*;
use crate::{state::*, errors::*, constants::*, events::*};

// General Assembly Instructions (delegate only)
//
// set_annual_assembly_date: schedule the annual assembly
//   - at least the configured lead time ahead, at most a year ahead
//   - not within nine months after the last assembly ended
//   - not within nine months of an annual assembly still pending
//   - not while another assembly is in session
// start_general_assembly: open a scheduled assembly once its date is reached
// finish_current_general_assembly: close the assembly in session
// cancel_general_assembly: drop a scheduled assembly, freeing its slot
//
// Extraordinary assemblies are scheduled by passing an AssemblyDate proposal.

#[derive(Accounts)]
pub struct ManageAssembly<'info> {
    pub delegate: Signer<'info>,

    #[account(
        mut,
        seeds = [
            ASSOCIATION,
            association.founder.as_ref(),
        ],
        bump = association.bump,
        has_one = delegate @ DaaError::OnlyDelegate,
    )]
    pub association: Account<'info, Association>,
}

impl<'info> ManageAssembly<'info> {
    pub fn set_annual_assembly_date(&mut self, date: i64) -> Result<()> {
        self.association.require_open()?;

        let now = Clock::get()?.unix_timestamp;
        let lead_time = self.association.config.ga_proposal_lead_time;
        self.association
            .schedule
            .validate_annual_date(date, now, lead_time)?;
        let assembly = self.association.schedule.schedule(date, true)?;

        msg!("Annual assembly {} scheduled for {}", assembly.index, date);
        emit!(AssemblyScheduled {
            association: self.association.key(),
            index: assembly.index,
            date,
            annual: true,
        });

        Ok(())
    }

    pub fn start_general_assembly(&mut self, index: u64) -> Result<()> {
        self.association.require_open()?;

        let now = Clock::get()?.unix_timestamp;
        let assembly = self.association.schedule.start(index, now)?;

        msg!("General assembly {} in session", index);
        emit!(AssemblyStarted {
            association: self.association.key(),
            index,
            annual: assembly.annual,
        });

        Ok(())
    }

    pub fn finish_current_general_assembly(&mut self) -> Result<()> {
        self.association.require_open()?;

        let now = Clock::get()?.unix_timestamp;
        let assembly = self.association.schedule.finish(now)?;

        msg!("General assembly {} finished", assembly.index);
        emit!(AssemblyFinished {
            association: self.association.key(),
            index: assembly.index,
            finished_at: now,
        });

        Ok(())
    }

    pub fn cancel_general_assembly(&mut self, index: u64) -> Result<()> {
        self.association.require_open()?;

        let assembly = self.association.schedule.cancel(index)?;

        msg!("General assembly {} scheduled for {} cancelled", index, assembly.date);
        emit!(AssemblyCancelled {
            association: self.association.key(),
            index,
            date: assembly.date,
            annual: assembly.annual,
        });

        Ok(())
    }
}
