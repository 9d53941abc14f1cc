pub mod admin_force_cancel;
pub mod auto_claim;
pub mod auto_claim_degen_fallback;
pub mod begin_degen_execution;
pub mod cancel_round;
pub mod claim;
pub mod claim_degen_fallback;
pub mod claim_refund;
pub mod close_participant;
pub mod close_round;
pub mod degen_vrf_callback;
pub mod deposit_any;
pub mod finalize_degen_success;
pub mod init_config;
pub mod lock_round;
pub mod request_degen_vrf;
pub mod request_vrf;
pub mod set_treasury_usdc_ata;
pub mod start_round;
pub mod transfer_admin;
pub mod update_config;
pub mod upsert_degen_config;
pub mod upsert_degen_mint_list;
pub mod vrf_callback;

#[cfg(feature = "devnet")]
pub mod mock_set_degen_vrf;
#[cfg(feature = "devnet")]
pub mod mock_set_vrf_meta;
#[cfg(feature = "devnet")]
pub mod mock_settle;

pub use admin_force_cancel::*;
pub use auto_claim::*;
pub use auto_claim_degen_fallback::*;
pub use begin_degen_execution::*;
pub use cancel_round::*;
pub use claim::*;
pub use claim_degen_fallback::*;
pub use claim_refund::*;
pub use close_participant::*;
pub use close_round::*;
pub use degen_vrf_callback::*;
pub use deposit_any::*;
pub use finalize_degen_success::*;
pub use init_config::*;
pub use lock_round::*;
pub use request_degen_vrf::*;
pub use request_vrf::*;
pub use set_treasury_usdc_ata::*;
pub use start_round::*;
pub use transfer_admin::*;
pub use update_config::*;
pub use upsert_degen_config::*;
pub use upsert_degen_mint_list::*;
pub use vrf_callback::*;

#[cfg(feature = "devnet")]
pub use mock_set_degen_vrf::*;
#[cfg(feature = "devnet")]
pub use mock_set_vrf_meta::*;
#[cfg(feature = "devnet")]
pub use mock_settle::*;
