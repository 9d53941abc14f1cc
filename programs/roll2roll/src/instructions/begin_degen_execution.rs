use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{
    constants::*,
    errors::ErrorCode,
    events::DegenExecutionStarted,
    state::{Config, DegenClaim, DegenClaimStatus, DegenConfig, Round, RoundStatus},
    utils::compute_claim_amounts,
};

/// Marks the round as mid-flight and snapshots the receiver's pre-swap balance.
/// Deliberately does not move any funds: the vault keeps the full prize until
/// `finalize_degen_success` proves the swap landed, so `claim_degen_fallback`
/// can still refund out of the vault if the executor never finalizes.
#[derive(Accounts)]
#[instruction(round_id: u64)]
pub struct BeginDegenExecution<'info> {
    #[account(mut)]
    pub executor: Signer<'info>,

    #[account(seeds = [SEED_CFG], bump = config.bump)]
    pub config: Box<Account<'info, Config>>,

    #[account(seeds = [SEED_DEGEN_CFG], bump = degen_config.bump)]
    pub degen_config: Box<Account<'info, DegenConfig>>,

    #[account(
        mut,
        seeds = [SEED_ROUND, &round_id.to_le_bytes()],
        bump,
    )]
    pub round: AccountLoader<'info, Round>,

    #[account(
        mut,
        seeds = [SEED_DEGEN_CLAIM, &round_id.to_le_bytes(), degen_claim.winner.as_ref()],
        bump = degen_claim.bump,
        constraint = degen_claim.round == round.key() @ ErrorCode::PdaMismatch,
        constraint = degen_claim.round_id == round_id @ ErrorCode::PdaMismatch,
    )]
    pub degen_claim: Box<Account<'info, DegenClaim>>,

    /// Vault USDC ATA owned by the round PDA — identity verified in handler,
    /// untouched here. The prize stays put until finalize proves the swap out.
    #[account(mut)]
    pub vault_usdc_ata: Box<Account<'info, TokenAccount>>,

    #[account(
        constraint = executor_usdc_ata.owner == executor.key() @ ErrorCode::AccountOwnerMismatch,
        constraint = executor_usdc_ata.mint == config.usdc_mint @ ErrorCode::AccountOwnerMismatch,
    )]
    pub executor_usdc_ata: Box<Account<'info, TokenAccount>>,

    #[account(
        constraint = receiver_token_ata.owner == degen_claim.winner @ ErrorCode::AccountOwnerMismatch,
        constraint = receiver_token_ata.mint == degen_claim.target_mint @ ErrorCode::AccountOwnerMismatch,
    )]
    pub receiver_token_ata: Box<Account<'info, TokenAccount>>,
}

pub fn handler(ctx: Context<BeginDegenExecution>, round_id: u64) -> Result<()> {
    require!(
        ctx.accounts.degen_config.executor == ctx.accounts.executor.key(),
        ErrorCode::DegenWrongExecutor
    );
    require!(
        ctx.accounts.executor_usdc_ata.amount == 0,
        ErrorCode::DegenBalanceCheckFailed
    );
    require!(
        ctx.accounts.degen_claim.target_mint != Pubkey::default(),
        ErrorCode::DegenDisabled
    );

    let round_key = ctx.accounts.round.key();
    let usdc_mint = ctx.accounts.config.usdc_mint;
    let (payout_raw, winner_key) = {
        let round = ctx.accounts.round.load()?;

        require!(round.status == RoundStatus::Settled as u8, ErrorCode::WrongStatus);
        require!(round.degen_mode == DEGEN_MODE_SELECTED, ErrorCode::WrongStatus);
        require!(
            ctx.accounts.degen_claim.status == DegenClaimStatus::ReadyToExecute as u8,
            ErrorCode::WrongStatus
        );
        require!(
            ctx.accounts.vault_usdc_ata.key().to_bytes() == round.vault_usdc_ata,
            ErrorCode::AccountOwnerMismatch
        );
        require!(ctx.accounts.vault_usdc_ata.mint == usdc_mint, ErrorCode::AccountOwnerMismatch);
        require!(ctx.accounts.vault_usdc_ata.owner == round_key, ErrorCode::AccountOwnerMismatch);

        let reimburse_vrf = Pubkey::new_from_array(round.vrf_payer) != Pubkey::default() && round.vrf_reimbursed == 0;
        let amounts = compute_claim_amounts(round.total_usdc, ctx.accounts.config.fee_bps, reimburse_vrf)?;
        (amounts.payout, Pubkey::new_from_array(round.winner))
    };

    {
        let mut round = ctx.accounts.round.load_mut()?;
        round.degen_mode = DEGEN_MODE_EXECUTING;
    }

    let now = Clock::get()?.unix_timestamp;
    let degen_claim = &mut ctx.accounts.degen_claim;
    degen_claim.status = DegenClaimStatus::Executing as u8;
    degen_claim.executor = ctx.accounts.executor.key();
    degen_claim.receiver_token_ata = ctx.accounts.receiver_token_ata.key();
    degen_claim.receiver_pre_balance = ctx.accounts.receiver_token_ata.amount;
    degen_claim.payout_raw = payout_raw;
    degen_claim.claimed_at = 0;
    degen_claim.fulfilled_at = now;

    emit!(DegenExecutionStarted {
        round_id,
        winner: winner_key,
        executor: ctx.accounts.executor.key(),
        payout_raw,
        min_out_raw: degen_claim.min_out_raw,
        target_mint: degen_claim.target_mint,
    });

    Ok(())
}
