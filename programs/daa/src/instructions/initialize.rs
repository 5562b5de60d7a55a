use anchor_lang::prelude::*;
use anchor_lang::system_program::{create_account, CreateAccount};
use crate::{state::*, constants::*, events::*};

// Initialize Instruction
//
// Creates a new association with:
// - Founder as the delegate
// - Two initial whitelisters (headcount starts at 3)
// - Vault PDA for holding the treasury lamports
//
// The founder pays for every account created here.

#[derive(Accounts)]
#[instruction(config: AssociationConfig)]
pub struct Initialize<'info> {
    // Founder and first delegate
    #[account(mut)]
    pub founder: Signer<'info>,

    // Association account PDA
    // Seeds: ["association", founder]
    #[account(
        init,
        payer = founder,
        space = ANCHOR_DISCRIMINATOR + Association::INIT_SPACE,
        seeds = [
            ASSOCIATION,
            founder.key().as_ref(),
        ],
        bump,
    )]
    pub association: Account<'info, Association>,

    // Vault PDA - holds the treasury
    // Seeds: ["vault", association]
    // Created as a system-owned account
    #[account(
        mut,
        seeds = [
            VAULT,
            association.key().as_ref(),
        ],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(
        init,
        payer = founder,
        space = ANCHOR_DISCRIMINATOR + Member::INIT_SPACE,
        seeds = [
            MEMBER,
            association.key().as_ref(),
            founder.key().as_ref(),
        ],
        bump,
    )]
    pub delegate_member: Account<'info, Member>,

    #[account(
        init,
        payer = founder,
        space = ANCHOR_DISCRIMINATOR + Member::INIT_SPACE,
        seeds = [
            MEMBER,
            association.key().as_ref(),
            config.initial_whitelister_1.as_ref(),
        ],
        bump,
    )]
    pub first_whitelister: Account<'info, Member>,

    #[account(
        init,
        payer = founder,
        space = ANCHOR_DISCRIMINATOR + Member::INIT_SPACE,
        seeds = [
            MEMBER,
            association.key().as_ref(),
            config.initial_whitelister_2.as_ref(),
        ],
        bump,
    )]
    pub second_whitelister: Account<'info, Member>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, config: AssociationConfig, bumps: &InitializeBumps) -> Result<()> {
        let association = self.association.key();
        let founder = self.founder.key();

        // 1. Config Validation
        // Positive fee and windows, two distinct whitelisters besides the founder
        config.validate(&founder)?;

        let now = Clock::get()?.unix_timestamp;

        // 2. Association State
        self.association
            .bootstrap(founder, config, now, bumps.association, bumps.vault);

        // 3. Founding Roles
        self.delegate_member
            .seed(association, founder, MemberRole::Delegate, now, bumps.delegate_member);
        self.first_whitelister.seed(
            association,
            config.initial_whitelister_1,
            MemberRole::Whitelister,
            now,
            bumps.first_whitelister,
        );
        self.second_whitelister.seed(
            association,
            config.initial_whitelister_2,
            MemberRole::Whitelister,
            now,
            bumps.second_whitelister,
        );

        // 4. Initialize Vault Account
        // Fund the rent-exempt minimum so the vault can hold lamports
        let signer_seeds: &[&[&[u8]]] = &[&[VAULT, association.as_ref(), &[bumps.vault]]];
        let min_rent = Rent::get()?.minimum_balance(0);
        create_account(
            CpiContext::new(
                self.system_program.to_account_info(),
                CreateAccount {
                    from: self.founder.to_account_info(),
                    to: self.vault.to_account_info(),
                },
            )
            .with_signer(signer_seeds),
            min_rent,
            0,
            &self.system_program.key(),
        )?;

        msg!("Association {} founded by {}", association, founder);
        for (address, role) in [
            (founder, MemberRole::Delegate),
            (config.initial_whitelister_1, MemberRole::Whitelister),
            (config.initial_whitelister_2, MemberRole::Whitelister),
        ] {
            emit!(MembershipStatusChanged {
                association,
                address,
                role,
                approvals: 0,
                has_paid: true,
            });
        }

        Ok(())
    }
}
