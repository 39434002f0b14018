//! Tool definitions module.
//!
//! Individual tool implementations, one file per tool, grouped by family.

pub mod astral;

pub use astral::{
    AstralConfigTool, CheckHealthTool, ProofByUidTool, QueryProofsTool, ServerInfoTool,
};
