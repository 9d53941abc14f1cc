pub const MAX_PARTICIPANTS: usize = 200;
pub const BPS_DENOMINATOR: u64 = 10_000;

pub const SEED_CFG: &[u8] = b"cfg";
pub const SEED_ROUND: &[u8] = b"round";
pub const SEED_PARTICIPANT: &[u8] = b"p";
pub const SEED_DEGEN_CLAIM: &[u8] = b"degen_claim";
pub const SEED_DEGEN_CFG: &[u8] = b"degen_cfg";
pub const SEED_DEGEN_MINTS: &[u8] = b"degen_mints";

/// Fixed USDC reimbursement for VRF payer (0.20 USDC = 200_000 raw, 6 decimals).
/// Deducted from pot during claim, sent to whoever paid for VRF.
pub const VRF_REIMBURSEMENT_USDC: u64 = 200_000;

/// Seconds after a round's natural end_ts before a permissionless `cancel_round`
/// can close out a round that never met its lock preconditions.
pub const CANCEL_GRACE_SEC: i64 = 3600;

pub const DEGEN_MODE_NONE: u8 = 0;
pub const DEGEN_MODE_REQUESTED: u8 = 1;
pub const DEGEN_MODE_SELECTED: u8 = 2;
pub const DEGEN_MODE_EXECUTING: u8 = 3;
pub const DEGEN_MODE_FINALISED: u8 = 4;

pub const DEGEN_FALLBACK_REASON_NONE: u8 = 0;
pub const DEGEN_FALLBACK_REASON_NO_VIABLE_ROUTE: u8 = 1;
pub const DEGEN_FALLBACK_REASON_TIMEOUT: u8 = 2;

pub const DEFAULT_DEGEN_FALLBACK_TIMEOUT_SEC: u32 = 300;

/// Max number of approved meme-token mints the admin-managed `DegenMintList` can hold.
pub const DEGEN_MINT_LIST_CAPACITY: usize = 32;
