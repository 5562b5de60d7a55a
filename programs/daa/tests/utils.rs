// Test utilities for the DAA program

#![allow(dead_code)]

use anchor_lang::AccountDeserialize;
use litesvm::LiteSVM;
use solana_sdk::{
    clock::Clock,
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as system_program;

// Program ID matching declare_id!
pub const DAA_PROGRAM_ID: Pubkey = Pubkey::new_from_array(daa::ID.to_bytes());

// PDA Seeds
pub const ASSOCIATION: &[u8] = b"association";
pub const MEMBER: &[u8] = b"member";
pub const VAULT: &[u8] = b"vault";
pub const PROPOSAL: &[u8] = b"proposal";
pub const VOTE_RECORD: &[u8] = b"vote";

pub const DAY: i64 = 86_400;
pub const MEMBERSHIP_FEE: u64 = 100_000_000;
pub const GA_VOTING_WINDOW: i64 = 600;
pub const GA_LEAD_TIME: i64 = 30 * DAY;
pub const EXPEL_VOTING_PERIOD: i64 = 7 * DAY;
pub const MAX_ASSEMBLY_HORIZON: i64 = 365 * DAY;

// Borsh variant index of each proposal request
pub const KIND_SIMPLE: u8 = 0;
pub const KIND_DELEGATE_CANDIDACY: u8 = 1;
pub const KIND_CHANGE_STATUTES: u8 = 2;
pub const KIND_DISSOLUTION: u8 = 3;
pub const KIND_UPDATE_ORGANIZATION: u8 = 4;
pub const KIND_EXPEL_MEMBER: u8 = 6;

// VoteChoice variant index
pub const VOTE_FOR: u8 = 0;
pub const VOTE_AGAINST: u8 = 1;

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

// Setup LiteSVM with the DAA program built by `anchor build`
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../target/deploy/daa.so");
    svm.add_program(DAA_PROGRAM_ID, program_bytes);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Sign with the payer and submit, errors rendered for assertions
pub fn send(svm: &mut LiteSVM, ix: Instruction, payer: &Keypair) -> Result<(), String> {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        &[payer],
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
        .map(|_| ())
        .map_err(|failed| format!("{:?}", failed.err))
}

/// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: i64) {
    let mut clock: Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds;
    clock.slot += 1;
    svm.set_sysvar(&clock);
    svm.expire_blockhash();
}

pub fn now(svm: &LiteSVM) -> i64 {
    svm.get_sysvar::<Clock>().unix_timestamp
}

pub fn lamports(svm: &LiteSVM, address: &Pubkey) -> u64 {
    svm.get_account(address).map(|account| account.lamports).unwrap_or(0)
}

// Derive association PDA
pub fn derive_association_pda(founder: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ASSOCIATION, founder.as_ref()], &DAA_PROGRAM_ID)
}

// Derive vault PDA
pub fn derive_vault_pda(association: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT, association.as_ref()], &DAA_PROGRAM_ID)
}

// Derive member record PDA
pub fn derive_member_pda(association: &Pubkey, address: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[MEMBER, association.as_ref(), address.as_ref()],
        &DAA_PROGRAM_ID,
    )
}

// Derive proposal PDA
pub fn derive_proposal_pda(association: &Pubkey, kind: u8, id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROPOSAL, association.as_ref(), &[kind], &id.to_le_bytes()],
        &DAA_PROGRAM_ID,
    )
}

// Derive vote record PDA
pub fn derive_vote_record_pda(proposal: &Pubkey, voter: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VOTE_RECORD, proposal.as_ref(), voter.as_ref()],
        &DAA_PROGRAM_ID,
    )
}

// Read and deserialize an association account
pub fn fetch_association(svm: &LiteSVM, founder: &Pubkey) -> daa::Association {
    let (association, _) = derive_association_pda(founder);
    let account = svm
        .get_account(&association)
        .expect("Association account should exist");
    daa::Association::try_deserialize(&mut account.data.as_slice())
        .expect("Association should deserialize")
}

pub fn fetch_member(svm: &LiteSVM, association: &Pubkey, address: &Pubkey) -> daa::Member {
    let (member, _) = derive_member_pda(association, address);
    let account = svm.get_account(&member).expect("Member account should exist");
    daa::Member::try_deserialize(&mut account.data.as_slice())
        .expect("Member should deserialize")
}

pub fn fetch_proposal(svm: &LiteSVM, proposal: &Pubkey) -> daa::Proposal {
    let account = svm
        .get_account(proposal)
        .expect("Proposal account should exist");
    daa::Proposal::try_deserialize(&mut account.data.as_slice())
        .expect("Proposal should deserialize")
}

// Optional accounts left out are passed as the program id
fn optional(account: Option<Pubkey>) -> AccountMeta {
    match account {
        Some(key) => AccountMeta::new(key, false),
        None => AccountMeta::new_readonly(DAA_PROGRAM_ID, false),
    }
}

// ======================== INSTRUCTION BUILDERS ========================

/// Build initialize instruction
pub fn build_initialize_ix(
    founder: &Pubkey,
    whitelister_1: &Pubkey,
    whitelister_2: &Pubkey,
) -> Instruction {
    let (association, _) = derive_association_pda(founder);
    let (vault, _) = derive_vault_pda(&association);
    let (delegate_member, _) = derive_member_pda(&association, founder);
    let (first_whitelister, _) = derive_member_pda(&association, whitelister_1);
    let (second_whitelister, _) = derive_member_pda(&association, whitelister_2);

    let mut data = anchor_discriminator("initialize").to_vec();
    data.extend_from_slice(&MEMBERSHIP_FEE.to_le_bytes());
    data.extend_from_slice(whitelister_1.as_ref());
    data.extend_from_slice(whitelister_2.as_ref());
    data.extend_from_slice(&GA_VOTING_WINDOW.to_le_bytes());
    data.extend_from_slice(&GA_LEAD_TIME.to_le_bytes());

    Instruction {
        program_id: DAA_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*founder, true),
            AccountMeta::new(association, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(delegate_member, false),
            AccountMeta::new(first_whitelister, false),
            AccountMeta::new(second_whitelister, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

/// Build request_membership instruction
pub fn build_request_membership_ix(requester: &Pubkey, founder: &Pubkey) -> Instruction {
    let (association, _) = derive_association_pda(founder);
    let (member, _) = derive_member_pda(&association, requester);

    Instruction {
        program_id: DAA_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*requester, true),
            AccountMeta::new(association, false),
            AccountMeta::new(member, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("request_membership").to_vec(),
    }
}

/// Build whitelist_member instruction
pub fn build_whitelist_member_ix(
    whitelister: &Pubkey,
    founder: &Pubkey,
    target: &Pubkey,
) -> Instruction {
    let (association, _) = derive_association_pda(founder);
    let (whitelister_member, _) = derive_member_pda(&association, whitelister);
    let (target_member, _) = derive_member_pda(&association, target);

    let mut data = anchor_discriminator("whitelist_member").to_vec();
    data.extend_from_slice(target.as_ref());

    Instruction {
        program_id: DAA_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*whitelister, true),
            AccountMeta::new(association, false),
            AccountMeta::new_readonly(whitelister_member, false),
            AccountMeta::new(target_member, false),
        ],
        data,
    }
}

/// Build pay_membership instruction
pub fn build_pay_membership_ix(payer: &Pubkey, founder: &Pubkey, amount: u64) -> Instruction {
    let (association, _) = derive_association_pda(founder);
    let (member, _) = derive_member_pda(&association, payer);
    let (vault, _) = derive_vault_pda(&association);

    let mut data = anchor_discriminator("pay_membership").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: DAA_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(association, false),
            AccountMeta::new(member, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

/// Build deposit_funds instruction
pub fn build_deposit_funds_ix(funder: &Pubkey, founder: &Pubkey, amount: u64) -> Instruction {
    let (association, _) = derive_association_pda(founder);
    let (vault, _) = derive_vault_pda(&association);

    let mut data = anchor_discriminator("deposit_funds").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: DAA_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*funder, true),
            AccountMeta::new(association, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

/// Build set_annual_assembly_date instruction
pub fn build_set_annual_assembly_date_ix(delegate: &Pubkey, founder: &Pubkey, date: i64) -> Instruction {
    let (association, _) = derive_association_pda(founder);

    let mut data = anchor_discriminator("set_annual_assembly_date").to_vec();
    data.extend_from_slice(&date.to_le_bytes());

    Instruction {
        program_id: DAA_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*delegate, true),
            AccountMeta::new(association, false),
        ],
        data,
    }
}

/// Build start_general_assembly instruction
pub fn build_start_general_assembly_ix(delegate: &Pubkey, founder: &Pubkey, index: u64) -> Instruction {
    let (association, _) = derive_association_pda(founder);

    let mut data = anchor_discriminator("start_general_assembly").to_vec();
    data.extend_from_slice(&index.to_le_bytes());

    Instruction {
        program_id: DAA_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*delegate, true),
            AccountMeta::new(association, false),
        ],
        data,
    }
}

/// Build finish_current_general_assembly instruction
pub fn build_finish_general_assembly_ix(delegate: &Pubkey, founder: &Pubkey) -> Instruction {
    let (association, _) = derive_association_pda(founder);

    Instruction {
        program_id: DAA_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*delegate, true),
            AccountMeta::new(association, false),
        ],
        data: anchor_discriminator("finish_current_general_assembly").to_vec(),
    }
}

/// Build cancel_general_assembly instruction
pub fn build_cancel_general_assembly_ix(delegate: &Pubkey, founder: &Pubkey, index: u64) -> Instruction {
    let (association, _) = derive_association_pda(founder);

    let mut data = anchor_discriminator("cancel_general_assembly").to_vec();
    data.extend_from_slice(&index.to_le_bytes());

    Instruction {
        program_id: DAA_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*delegate, true),
            AccountMeta::new(association, false),
        ],
        data,
    }
}

// Borsh encoding of a simple proposal request
pub fn simple_request(name: &str, amount: u64, destination: &Pubkey, duration: i64) -> Vec<u8> {
    let mut request = vec![KIND_SIMPLE];
    request.extend_from_slice(&(name.len() as u32).to_le_bytes());
    request.extend_from_slice(name.as_bytes());
    request.extend_from_slice(&amount.to_le_bytes());
    request.extend_from_slice(destination.as_ref());
    request.extend_from_slice(&duration.to_le_bytes());
    request
}

pub fn change_statutes_request(statutes_hash: [u8; 32]) -> Vec<u8> {
    let mut request = vec![KIND_CHANGE_STATUTES];
    request.extend_from_slice(&statutes_hash);
    request
}

pub fn dissolution_request(beneficiary: &Pubkey) -> Vec<u8> {
    let mut request = vec![KIND_DISSOLUTION];
    request.extend_from_slice(beneficiary.as_ref());
    request
}

pub fn update_organization_request(new_organization: &Pubkey) -> Vec<u8> {
    let mut request = vec![KIND_UPDATE_ORGANIZATION];
    request.extend_from_slice(new_organization.as_ref());
    request
}

// Candidacy carries no fields, the submitter is the candidate
pub fn candidacy_request() -> Vec<u8> {
    vec![KIND_DELEGATE_CANDIDACY]
}

pub fn expel_request(member: &Pubkey) -> Vec<u8> {
    let mut request = vec![KIND_EXPEL_MEMBER];
    request.extend_from_slice(member.as_ref());
    request
}

/// Build create_proposal instruction
/// `request` is the encoded request, its first byte is the kind
pub fn build_create_proposal_ix(
    submitter: &Pubkey,
    founder: &Pubkey,
    request: Vec<u8>,
    id: u64,
    subject: Option<&Pubkey>,
) -> Instruction {
    let (association, _) = derive_association_pda(founder);
    let (submitter_member, _) = derive_member_pda(&association, submitter);
    let (proposal, _) = derive_proposal_pda(&association, request[0], id);
    let subject_member = subject.map(|address| derive_member_pda(&association, address).0);

    let mut data = anchor_discriminator("create_proposal").to_vec();
    data.extend_from_slice(&request);

    Instruction {
        program_id: DAA_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*submitter, true),
            AccountMeta::new(association, false),
            AccountMeta::new_readonly(submitter_member, false),
            match subject_member {
                Some(key) => AccountMeta::new_readonly(key, false),
                None => AccountMeta::new_readonly(DAA_PROGRAM_ID, false),
            },
            AccountMeta::new(proposal, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

/// Build cast_vote instruction
pub fn build_cast_vote_ix(
    voter: &Pubkey,
    founder: &Pubkey,
    proposal: &Pubkey,
    choice: u8,
    recipient: Option<Pubkey>,
) -> Instruction {
    let (association, _) = derive_association_pda(founder);
    let (voter_member, _) = derive_member_pda(&association, voter);
    let (vote_record, _) = derive_vote_record_pda(proposal, voter);
    let (vault, _) = derive_vault_pda(&association);

    let mut data = anchor_discriminator("cast_vote").to_vec();
    data.push(choice);

    Instruction {
        program_id: DAA_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*voter, true),
            AccountMeta::new(association, false),
            AccountMeta::new(voter_member, false),
            AccountMeta::new(*proposal, false),
            AccountMeta::new(vote_record, false),
            AccountMeta::new(vault, false),
            optional(recipient),
            optional(None),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

/// Build conclude_proposal instruction
/// `subject` is the address whose member record an expulsion settles on
pub fn build_conclude_proposal_ix(
    caller: &Pubkey,
    founder: &Pubkey,
    proposal: &Pubkey,
    recipient: Option<Pubkey>,
    subject: Option<&Pubkey>,
) -> Instruction {
    let (association, _) = derive_association_pda(founder);
    let (vault, _) = derive_vault_pda(&association);
    let subject_member = subject.map(|address| derive_member_pda(&association, address).0);

    Instruction {
        program_id: DAA_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*caller, true),
            AccountMeta::new(association, false),
            AccountMeta::new(*proposal, false),
            AccountMeta::new(vault, false),
            optional(recipient),
            optional(subject_member),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("conclude_proposal").to_vec(),
    }
}

/// Build withdraw_from_internal_wallet instruction
pub fn build_withdraw_ix(destination: &Pubkey, founder: &Pubkey, proposal: &Pubkey) -> Instruction {
    let (association, _) = derive_association_pda(founder);
    let (vault, _) = derive_vault_pda(&association);

    Instruction {
        program_id: DAA_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*destination, true),
            AccountMeta::new(association, false),
            AccountMeta::new(*proposal, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("withdraw_from_internal_wallet").to_vec(),
    }
}

/// Build elect_delegate instruction
/// Candidacy proposals of the last session follow as remaining accounts
pub fn build_elect_delegate_ix(
    caller: &Pubkey,
    founder: &Pubkey,
    current_delegate: &Pubkey,
    elected: Option<&Pubkey>,
    candidacies: &[Pubkey],
) -> Instruction {
    let (association, _) = derive_association_pda(founder);
    let (caller_member, _) = derive_member_pda(&association, caller);
    let (current_delegate_member, _) = derive_member_pda(&association, current_delegate);
    let elected_member = elected.map(|address| derive_member_pda(&association, address).0);

    let mut accounts = vec![
        AccountMeta::new_readonly(*caller, true),
        AccountMeta::new(association, false),
        AccountMeta::new_readonly(caller_member, false),
        AccountMeta::new(current_delegate_member, false),
        optional(elected_member),
    ];
    accounts.extend(
        candidacies
            .iter()
            .map(|proposal| AccountMeta::new_readonly(*proposal, false)),
    );

    Instruction {
        program_id: DAA_PROGRAM_ID,
        accounts,
        data: anchor_discriminator("elect_delegate").to_vec(),
    }
}
