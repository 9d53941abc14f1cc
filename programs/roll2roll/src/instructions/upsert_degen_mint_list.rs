use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::ErrorCode,
    events::DegenMintListUpdated,
    state::{Config, DegenMintList},
};

#[derive(Accounts)]
pub struct UpsertDegenMintList<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [SEED_CFG],
        bump = config.bump,
        constraint = config.admin == admin.key() @ ErrorCode::InvalidAdmin,
    )]
    pub config: Account<'info, Config>,

    #[account(
        init_if_needed,
        payer = admin,
        space = DegenMintList::SPACE,
        seeds = [SEED_DEGEN_MINTS],
        bump,
    )]
    pub degen_mint_list: Account<'info, DegenMintList>,

    pub system_program: Program<'info, System>,
}

/// Replaces the full approved-mint set in one call; the list is small enough
/// (capped at `DEGEN_MINT_LIST_CAPACITY`) that a partial-update API isn't worth it.
pub fn handler(ctx: Context<UpsertDegenMintList>, mints: Vec<Pubkey>, enabled: Vec<bool>) -> Result<()> {
    require!(mints.len() == enabled.len(), ErrorCode::InvalidConfigParam);
    require!(mints.len() <= DEGEN_MINT_LIST_CAPACITY, ErrorCode::InvalidConfigParam);

    let list = &mut ctx.accounts.degen_mint_list;
    list.admin = ctx.accounts.admin.key();
    list.bump = ctx.bumps.degen_mint_list;
    list.count = mints.len() as u8;
    list._padding = [0u8; 6];

    let mut mints_arr = [Pubkey::default(); DEGEN_MINT_LIST_CAPACITY];
    let mut enabled_arr = [false; DEGEN_MINT_LIST_CAPACITY];
    for (i, (mint, en)) in mints.iter().zip(enabled.iter()).enumerate() {
        mints_arr[i] = *mint;
        enabled_arr[i] = *en;
    }
    list.mints = mints_arr;
    list.enabled = enabled_arr;

    emit!(DegenMintListUpdated {
        admin: ctx.accounts.admin.key(),
        count: list.count,
    });

    Ok(())
}
