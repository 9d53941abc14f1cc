use anchor_lang::prelude::*;
use anchor_lang::AccountDeserialize;

use crate::{
    constants::*,
    errors::ErrorCode,
    events::DegenVrfFulfilled,
    state::{Config, DegenClaim, DegenClaimStatus, DegenConfig, DegenMintList, Round, RoundStatus},
    utils::{checked_add_i64, compute_claim_amounts, select_degen_mint_index},
};

const VRF_PROGRAM_IDENTITY_BYTES: [u8; 32] =
    ephemeral_vrf_sdk::consts::VRF_PROGRAM_IDENTITY.to_bytes();
const VRF_PROGRAM_IDENTITY: Pubkey = Pubkey::new_from_array(VRF_PROGRAM_IDENTITY_BYTES);

#[derive(Accounts)]
pub struct DegenVrfCallback<'info> {
    #[account(address = VRF_PROGRAM_IDENTITY)]
    pub vrf_program_identity: Signer<'info>,

    #[account(seeds = [SEED_CFG], bump = config.bump)]
    pub config: Account<'info, Config>,

    /// No seeds constraint here: callback does not include round_id arg.
    #[account(mut)]
    pub round: AccountLoader<'info, Round>,

    #[account(mut)]
    pub degen_claim: Account<'info, DegenClaim>,

    #[account(seeds = [SEED_DEGEN_MINTS], bump = degen_mint_list.bump)]
    pub degen_mint_list: Account<'info, DegenMintList>,

    /// CHECK: optional degen config PDA; may be uninitialized.
    #[account(seeds = [SEED_DEGEN_CFG], bump)]
    pub degen_config: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<DegenVrfCallback>, randomness: [u8; 32]) -> Result<()> {
    let round_key = ctx.accounts.round.key();

    let (round_id, winner_key, round_bump, total_usdc, reimburse_vrf) = {
        let round = ctx.accounts.round.load()?;
        (
            round.round_id,
            Pubkey::new_from_array(round.winner),
            round.bump,
            round.total_usdc,
            Pubkey::new_from_array(round.vrf_payer) != Pubkey::default() && round.vrf_reimbursed == 0,
        )
    };

    let expected_round_key = Pubkey::create_program_address(
        &[SEED_ROUND, &round_id.to_le_bytes(), &[round_bump]],
        &crate::ID,
    )
    .map_err(|_| ErrorCode::PdaMismatch)?;
    require!(round_key == expected_round_key, ErrorCode::PdaMismatch);

    let expected_degen_claim_key = Pubkey::create_program_address(
        &[
            SEED_DEGEN_CLAIM,
            &round_id.to_le_bytes(),
            winner_key.as_ref(),
            &[ctx.accounts.degen_claim.bump],
        ],
        &crate::ID,
    )
    .map_err(|_| ErrorCode::PdaMismatch)?;
    require!(
        ctx.accounts.degen_claim.key() == expected_degen_claim_key,
        ErrorCode::PdaMismatch
    );
    require!(ctx.accounts.degen_claim.round == round_key, ErrorCode::PdaMismatch);
    require!(ctx.accounts.degen_claim.round_id == round_id, ErrorCode::PdaMismatch);
    require!(ctx.accounts.degen_claim.winner == winner_key, ErrorCode::PdaMismatch);
    require!(
        ctx.accounts.degen_claim.status == DegenClaimStatus::Pending as u8,
        ErrorCode::WrongStatus
    );

    {
        let round = ctx.accounts.round.load()?;
        require!(round.status == RoundStatus::Settled as u8, ErrorCode::WrongStatus);
        require!(round.degen_mode == DEGEN_MODE_REQUESTED, ErrorCode::WrongStatus);
    }

    let now = Clock::get()?.unix_timestamp;
    let fallback_timeout_sec = if ctx.accounts.degen_config.data_is_empty() {
        DEFAULT_DEGEN_FALLBACK_TIMEOUT_SEC
    } else {
        let mut data: &[u8] = &ctx.accounts.degen_config.data.borrow();
        let degen_cfg =
            DegenConfig::try_deserialize(&mut data).map_err(|_| ErrorCode::InvalidDiscriminator)?;
        if degen_cfg.fallback_timeout_sec == 0 {
            DEFAULT_DEGEN_FALLBACK_TIMEOUT_SEC
        } else {
            degen_cfg.fallback_timeout_sec
        }
    };

    let amounts = compute_claim_amounts(total_usdc, ctx.accounts.config.fee_bps, reimburse_vrf)?;

    let mint_list = &ctx.accounts.degen_mint_list;
    let selected = select_degen_mint_index(&randomness, mint_list.count as usize)
        .filter(|&idx| mint_list.enabled[idx]);

    let degen_claim_key = ctx.accounts.degen_claim.key();
    let degen_claim = &mut ctx.accounts.degen_claim;
    degen_claim.randomness = randomness;
    degen_claim.fulfilled_at = now;
    degen_claim.payout_raw = amounts.payout;
    degen_claim.min_out_raw = 0;
    degen_claim.receiver_pre_balance = 0;
    degen_claim.executor = Pubkey::default();
    degen_claim.receiver_token_ata = Pubkey::default();

    let fallback_reason = match selected {
        Some(idx) => {
            degen_claim.status = DegenClaimStatus::ReadyToExecute as u8;
            degen_claim.target_mint = mint_list.mints[idx];
            degen_claim.fallback_after_ts = checked_add_i64(now, fallback_timeout_sec as i64)?;
            degen_claim.fallback_reason = DEGEN_FALLBACK_REASON_NONE;
            DEGEN_FALLBACK_REASON_NONE
        }
        None => {
            degen_claim.status = DegenClaimStatus::ReadyToClaim as u8;
            degen_claim.target_mint = Pubkey::default();
            degen_claim.fallback_after_ts = now;
            degen_claim.fallback_reason = DEGEN_FALLBACK_REASON_NO_VIABLE_ROUTE;
            DEGEN_FALLBACK_REASON_NO_VIABLE_ROUTE
        }
    };

    {
        let mut round = ctx.accounts.round.load_mut()?;
        round.degen_mode = DEGEN_MODE_SELECTED;
    }

    emit!(DegenVrfFulfilled {
        round_id,
        winner: winner_key,
        degen_claim: degen_claim_key,
        target_mint: degen_claim.target_mint,
        payout_raw: degen_claim.payout_raw,
        fallback_after_ts: degen_claim.fallback_after_ts,
        fallback_reason,
    });

    Ok(())
}
