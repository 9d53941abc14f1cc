use anchor_lang::prelude::*;
use crate::{
    constants::*,
    errors::ErrorCode,
    events::{RoundCancelled, RoundLocked},
    state::{Config, Round, RoundStatus},
};

#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct LockRound<'info> {
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

/// Permissionless: anyone can crank a round past its end_ts into Locked (if it met
/// quorum) or Cancelled (if it didn't). Calling again once Locked is a no-op.
pub fn handler(ctx: Context<LockRound>, _round_id: u64) -> Result<()> {
    let cfg = &ctx.accounts.config;
    let mut round = ctx.accounts.round.load_mut()?;

    if round.status == RoundStatus::Locked as u8 {
        return Ok(());
    }
    require!(round.status == RoundStatus::Open as u8, ErrorCode::WrongStatus);

    let now = Clock::get()?.unix_timestamp;
    require!(now >= round.end_ts, ErrorCode::RoundNotYetExpired);

    let quorum_met = round.participants_count >= cfg.min_participants
        && round.total_tickets >= cfg.min_total_tickets;

    if !quorum_met {
        round.status = RoundStatus::Cancelled as u8;
        emit!(RoundCancelled {
            round_id: round.round_id,
            total_usdc: round.total_usdc,
            participants_count: round.participants_count,
        });
        return Ok(());
    }

    round.status = RoundStatus::Locked as u8;

    emit!(RoundLocked {
        round_id: round.round_id,
        total_usdc: round.total_usdc,
        total_tickets: round.total_tickets,
        participants_count: round.participants_count,
    });

    Ok(())
}
