use anchor_lang::prelude::*;
use crate::{constants::*, errors::DaaError};

// Life cycle of a general assembly slot
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum AssemblyStatus {
    // Free slot
    #[default]
    Vacant,
    // Date set, waiting for the delegate to open it
    Scheduled,
    // Currently running, at most one at a time
    InSession,
    Finished,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace, Default)]
pub struct GeneralAssembly {
    pub index: u64,
    pub date: i64,
    pub annual: bool,
    pub status: AssemblyStatus,
    pub started_at: i64,
    pub finished_at: i64,
}

// Calendar of general assemblies, embedded in the association
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace, Default)]
pub struct AssemblySchedule {
    pub assemblies: [GeneralAssembly; MAX_SCHEDULED_ASSEMBLIES],

    // Assemblies ever scheduled, also the next index
    pub assembly_count: u64,

    // Index of the most recently scheduled assembly
    pub latest: Option<u64>,

    // Assembly in session
    pub current: Option<u64>,
    pub current_annual: bool,

    // Most recently opened session, delegate candidacies are counted against it
    pub last_session: Option<u64>,
    pub session_candidacies: u64,

    // End of the last finished assembly of any kind (0 if none yet)
    pub last_finished_at: i64,
}

impl AssemblySchedule {
    pub fn is_in_session(&self) -> bool {
        self.current.is_some()
    }

    pub fn require_session(&self) -> Result<u64> {
        self.current.ok_or(error!(DaaError::NoAssemblyInSession))
    }

    pub fn require_annual_session(&self) -> Result<u64> {
        let index = self.require_session()?;
        require!(self.current_annual, DaaError::NotAnnualAssembly);
        Ok(index)
    }

    pub fn get(&self, index: u64) -> Option<&GeneralAssembly> {
        self.assemblies
            .iter()
            .find(|assembly| assembly.status != AssemblyStatus::Vacant && assembly.index == index)
    }

    fn get_mut(&mut self, index: u64) -> Option<&mut GeneralAssembly> {
        self.assemblies
            .iter_mut()
            .find(|assembly| assembly.status != AssemblyStatus::Vacant && assembly.index == index)
    }

    // (date, finished, annual) of the most recently scheduled assembly
    pub fn latest_added(&self) -> Option<(i64, bool, bool)> {
        let assembly = self.get(self.latest?)?;
        Some((
            assembly.date,
            assembly.status == AssemblyStatus::Finished,
            assembly.annual,
        ))
    }

    // Assembly dates lie between now + lead time and now + horizon
    pub fn validate_date_range(date: i64, now: i64, lead_time: i64) -> Result<()> {
        let earliest = now.checked_add(lead_time).ok_or(DaaError::Overflow)?;
        require!(date >= earliest, DaaError::AssemblyDateTooSoon);
        let latest = now.checked_add(MAX_ASSEMBLY_HORIZON).ok_or(DaaError::Overflow)?;
        require!(date <= latest, DaaError::AssemblyDateTooFar);
        Ok(())
    }

    // Blackout runs from the end of the last finished assembly and from
    // the date of every annual assembly not held yet
    pub fn validate_annual_date(&self, date: i64, now: i64, lead_time: i64) -> Result<()> {
        require!(!self.is_in_session(), DaaError::AssemblyInSession);
        Self::validate_date_range(date, now, lead_time)?;

        if self.last_finished_at > 0 {
            let earliest = self
                .last_finished_at
                .checked_add(ANNUAL_ASSEMBLY_BLACKOUT)
                .ok_or(DaaError::Overflow)?;
            require!(date >= earliest, DaaError::AssemblyBlackout);
        }

        // Pending annual assemblies block both sides of their date
        for assembly in self.assemblies.iter() {
            if assembly.annual && assembly.status == AssemblyStatus::Scheduled {
                let gap = date
                    .checked_sub(assembly.date)
                    .ok_or(DaaError::Overflow)?
                    .checked_abs()
                    .ok_or(DaaError::Overflow)?;
                require!(gap >= ANNUAL_ASSEMBLY_BLACKOUT, DaaError::AssemblyBlackout);
            }
        }
        Ok(())
    }

    pub fn schedule(&mut self, date: i64, annual: bool) -> Result<GeneralAssembly> {
        let index = self.assembly_count;
        let slot = self
            .assemblies
            .iter_mut()
            .find(|assembly| {
                matches!(assembly.status, AssemblyStatus::Vacant | AssemblyStatus::Finished)
            })
            .ok_or(DaaError::AssemblyScheduleFull)?;

        *slot = GeneralAssembly {
            index,
            date,
            annual,
            status: AssemblyStatus::Scheduled,
            started_at: 0,
            finished_at: 0,
        };
        let scheduled = *slot;

        self.assembly_count = index.checked_add(1).ok_or(DaaError::Overflow)?;
        self.latest = Some(index);
        Ok(scheduled)
    }

    pub fn start(&mut self, index: u64, now: i64) -> Result<GeneralAssembly> {
        require!(!self.is_in_session(), DaaError::AssemblyInSession);

        let assembly = self.get_mut(index).ok_or(DaaError::AssemblyNotFound)?;
        require!(
            assembly.status == AssemblyStatus::Scheduled,
            DaaError::AssemblyNotScheduled
        );
        require!(now >= assembly.date, DaaError::AssemblyDateNotReached);

        assembly.status = AssemblyStatus::InSession;
        assembly.started_at = now;
        let started = *assembly;

        self.current = Some(index);
        self.current_annual = started.annual;
        self.last_session = Some(index);
        self.session_candidacies = 0;
        Ok(started)
    }

    pub fn finish(&mut self, now: i64) -> Result<GeneralAssembly> {
        let index = self.require_session()?;
        let assembly = self.get_mut(index).ok_or(DaaError::AssemblyNotFound)?;

        assembly.status = AssemblyStatus::Finished;
        assembly.finished_at = now;
        let finished = *assembly;

        self.last_finished_at = now;
        self.current = None;
        self.current_annual = false;
        Ok(finished)
    }

    // Drop an assembly that has not started, its slot becomes free
    pub fn cancel(&mut self, index: u64) -> Result<GeneralAssembly> {
        let assembly = self.get_mut(index).ok_or(DaaError::AssemblyNotFound)?;
        require!(
            assembly.status == AssemblyStatus::Scheduled,
            DaaError::AssemblyNotScheduled
        );

        let cancelled = *assembly;
        *assembly = GeneralAssembly::default();
        Ok(cancelled)
    }

    // Count a delegate candidacy in the running session
    pub fn record_candidacy(&mut self) -> Result<u64> {
        let index = self.require_session()?;
        self.session_candidacies = self
            .session_candidacies
            .checked_add(1)
            .ok_or(DaaError::Overflow)?;
        Ok(index)
    }
}
