use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    events::RoundCancelled,
    state::{Config, Round, RoundStatus},
};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct CancelRound<'info> {
    pub caller: Signer<'info>,

    #[account(seeds = [SEED_CFG], bump = config.bump)]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [SEED_ROUND, &round_id.to_le_bytes()],
        bump,
    )]
    pub round: AccountLoader<'info, Round>,
}

/// Permissionless timeout cancel. If a round sat Open past its grace window without
/// ever meeting quorum, anyone can cancel it outright — funds stay in the vault
/// (escrow pattern) for participants to reclaim via `claim_refund`.
pub fn handler(ctx: Context<CancelRound>, _round_id: u64) -> Result<()> {
    let cfg = &ctx.accounts.config;
    let mut round = ctx.accounts.round.load_mut()?;

    require!(round.status == RoundStatus::Open as u8, ErrorCode::WrongStatus);

    let now = Clock::get()?.unix_timestamp;
    let grace_deadline = round.end_ts.checked_add(CANCEL_GRACE_SEC).ok_or(ErrorCode::MathOverflow)?;
    require!(now > grace_deadline, ErrorCode::RoundNotYetExpired);

    let quorum_met = round.participants_count >= cfg.min_participants
        && round.total_tickets >= cfg.min_total_tickets;
    require!(!quorum_met, ErrorCode::WrongStatus);

    round.status = RoundStatus::Cancelled as u8;

    emit!(RoundCancelled {
        round_id: round.round_id,
        total_usdc: round.total_usdc,
        participants_count: round.participants_count,
    });

    Ok(())
}
