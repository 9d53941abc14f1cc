use anchor_lang::prelude::*;

/// Stable-ordinal error taxonomy. Ordinals are fixed by the wire protocol;
/// never reorder or remove a variant — append new ones at the end instead.
#[error_code]
pub enum ErrorCode {
    #[msg("Protocol is paused")]
    Paused,
    #[msg("Unauthorized signer for this instruction")]
    Unauthorized,
    #[msg("Caller does not match the configured admin")]
    InvalidAdmin,

    #[msg("Round is not in the expected status for this operation")]
    WrongStatus,
    #[msg("Round timer has expired — no more deposits accepted")]
    RoundExpired,
    #[msg("Round countdown has not yet expired")]
    RoundNotYetExpired,
    #[msg("Round does not meet the participant/ticket quorum required for this operation")]
    LockPreconditionsUnmet,
    #[msg("Prize for this round has already been claimed")]
    AlreadyClaimed,

    #[msg("Deposit delta is not a multiple of the configured ticket unit")]
    InvalidTicketUnit,
    #[msg("Deposit is too small to mint at least one ticket")]
    DepositTooSmall,
    #[msg("Deposit exceeds the configured max per-user limit for this round")]
    DepositTooLarge,
    #[msg("Participant roster is full")]
    RosterFull,
    #[msg("Swap or deposit output did not meet the required minimum")]
    SlippageExceeded,

    #[msg("No VRF request is pending for this round")]
    VrfNotRequested,
    #[msg("VRF randomness has already been delivered for this round")]
    VrfAlreadyDelivered,
    #[msg("Caller is not the MagicBlock VRF program identity")]
    InvalidVrfAuthority,
    #[msg("Derived winning ticket fell outside the valid ticket range")]
    RandomnessOutOfRange,

    #[msg("Only the recorded winner may claim")]
    NotWinner,
    #[msg("Vault does not hold enough USDC to cover this payout")]
    InsufficientVault,
    #[msg("Fee computation overflowed or underflowed")]
    FeeArithmeticOverflow,

    #[msg("Degen payout path is not available for this round")]
    DegenDisabled,
    #[msg("Caller is not the configured degen executor")]
    DegenWrongExecutor,
    #[msg("Degen fallback is not yet available")]
    DegenFallbackNotReady,
    #[msg("Degen execution has already been finalised")]
    DegenAlreadyFinalised,
    #[msg("Degen executor or receiver token balance failed the expected check")]
    DegenBalanceCheckFailed,

    #[msg("Checked arithmetic overflowed or underflowed")]
    MathOverflow,
    #[msg("Token account owner or mint did not match the expected value")]
    AccountOwnerMismatch,
    #[msg("Account did not match the expected program-derived address")]
    PdaMismatch,
    #[msg("Account discriminator did not match the expected account type")]
    InvalidDiscriminator,

    #[msg("Invalid configuration parameter")]
    InvalidConfigParam,
}
