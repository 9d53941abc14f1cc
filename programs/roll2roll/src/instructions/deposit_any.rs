use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::{
    constants::*,
    errors::ErrorCode,
    events::DepositEvent,
    state::{Config, Participant, Round, RoundStatus},
    utils::bit_add,
};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct DepositAny<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(seeds = [SEED_CFG], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [SEED_ROUND, &round_id.to_le_bytes()],
        bump,
    )]
    pub round: AccountLoader<'info, Round>,

    #[account(
        init_if_needed,
        payer = user,
        space = Participant::SPACE,
        seeds = [SEED_PARTICIPANT, round.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub participant: Account<'info, Participant>,

    #[account(
        mut,
        constraint = user_usdc_ata.mint == config.usdc_mint @ ErrorCode::AccountOwnerMismatch,
        constraint = user_usdc_ata.owner == user.key() @ ErrorCode::AccountOwnerMismatch,
    )]
    pub user_usdc_ata: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = vault_usdc_ata.mint == config.usdc_mint @ ErrorCode::AccountOwnerMismatch,
    )]
    pub vault_usdc_ata: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<DepositAny>, round_id: u64, usdc_balance_before: u64, min_out: u64) -> Result<()> {
    let cfg = &ctx.accounts.config;
    let round_key = ctx.accounts.round.key();
    let participant = &mut ctx.accounts.participant;

    let mut round = ctx.accounts.round.load_mut()?;

    require!(
        ctx.accounts.vault_usdc_ata.key().to_bytes() == round.vault_usdc_ata,
        ErrorCode::AccountOwnerMismatch
    );
    require!(
        ctx.accounts.vault_usdc_ata.owner == round_key,
        ErrorCode::AccountOwnerMismatch
    );

    require!(!cfg.paused, ErrorCode::Paused);
    require!(round.status == RoundStatus::Open as u8, ErrorCode::WrongStatus);

    let now = Clock::get()?.unix_timestamp;
    require!(now < round.end_ts, ErrorCode::RoundExpired);

    let b1 = ctx.accounts.user_usdc_ata.amount;
    require!(b1 >= usdc_balance_before, ErrorCode::SlippageExceeded);

    let delta = b1.checked_sub(usdc_balance_before).ok_or(ErrorCode::MathOverflow)?;
    require!(delta > 0, ErrorCode::DepositTooSmall);
    require!(delta >= min_out, ErrorCode::SlippageExceeded);
    require!(delta % cfg.ticket_unit == 0, ErrorCode::InvalidTicketUnit);

    let tickets_added = delta / cfg.ticket_unit;

    // Register new participant (or re-register stale participant from a reused round_id)
    if participant.round != round_key {
        let fenwick_index = round.participants_count;
        require!((fenwick_index as usize) < MAX_PARTICIPANTS, ErrorCode::RosterFull);

        participant.round = round_key;
        participant.round_id = round_id;
        participant.user = ctx.accounts.user.key();
        participant.fenwick_index = fenwick_index;
        participant.bump = ctx.bumps.participant;
        participant.tickets = 0;
        participant.usdc_deposited = 0;
        participant.deposits_count = 0;

        round.participants_count = fenwick_index.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        round.participants.data[fenwick_index as usize] = ctx.accounts.user.key().to_bytes();
    }

    if round.first_deposit_ts == 0 {
        round.first_deposit_ts = now;
    }

    let new_usdc_total = participant.usdc_deposited.checked_add(delta).ok_or(ErrorCode::MathOverflow)?;
    if cfg.max_deposit_per_user > 0 {
        require!(new_usdc_total <= cfg.max_deposit_per_user, ErrorCode::DepositTooLarge);
    }

    participant.tickets = participant.tickets.checked_add(tickets_added).ok_or(ErrorCode::MathOverflow)?;
    participant.usdc_deposited = new_usdc_total;
    participant.deposits_count = participant.deposits_count.checked_add(1).ok_or(ErrorCode::MathOverflow)?;

    round.total_tickets = round.total_tickets.checked_add(tickets_added).ok_or(ErrorCode::MathOverflow)?;
    round.total_usdc = round.total_usdc.checked_add(delta).ok_or(ErrorCode::MathOverflow)?;

    // Fenwick tree is 1-indexed; participant.fenwick_index is 0-indexed.
    bit_add(&mut round.fenwick.data, participant.fenwick_index as usize + 1, tickets_added)?;

    let round_id_val = round.round_id;
    let total_usdc_after = round.total_usdc;
    let total_tickets_after = round.total_tickets;
    let fenwick_index = participant.fenwick_index;

    drop(round);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user_usdc_ata.to_account_info(),
                to: ctx.accounts.vault_usdc_ata.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        delta,
    )?;

    emit!(DepositEvent {
        round_id: round_id_val,
        user: ctx.accounts.user.key(),
        delta_usdc: delta,
        tickets_added,
        fenwick_index,
        total_usdc_after,
        total_tickets_after,
    });

    Ok(())
}
