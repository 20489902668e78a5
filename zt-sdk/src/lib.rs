#![deny(missing_docs)]

//! Transparent Zcash vault SDK.
//!
//! Re-exports the component crates and adds a [`Vault`] facade that
//! imports keys, derives and validates addresses, and builds, signs and
//! broadcasts payments against a node.

pub use zt_primitives as primitives;
pub use zt_rpc as rpc;
pub use zt_script as script;
pub use zt_transaction as transaction;

pub mod config;
pub mod error;
pub mod logger;
pub mod vault;

pub use config::Config;
pub use error::SdkError;
pub use logger::init_logger;
pub use vault::{TransparentKey, Vault};
