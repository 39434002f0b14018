//! Astral tools module.
//!
//! One file per tool, following the registry/router layout:
//! - `health`: hard-failing API health check
//! - `server_info`: local server metadata
//! - `query_proofs`: paginated location-proof query
//! - `proof_by_uid`: single-proof lookup with distinguished not-found
//! - `astral_config`: remote configuration fetch
//! - `common`: shared validators and result helpers

pub mod astral_config;
pub mod common;
pub mod health;
pub mod proof_by_uid;
pub mod query_proofs;
pub mod server_info;

pub use astral_config::{AstralConfigParams, AstralConfigTool};
pub use health::{CheckHealthParams, CheckHealthTool};
pub use proof_by_uid::{ProofByUidParams, ProofByUidTool};
pub use query_proofs::{QueryProofsParams, QueryProofsTool};
pub use server_info::{ServerInfoParams, ServerInfoTool};
