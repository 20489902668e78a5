#![deny(missing_docs)]

//! # zt-rpc
//!
//! JSON-RPC client for a zcashd-compatible node with the address index
//! enabled.
//!
//! The client lists unspent outputs, reads balances and the chain tip,
//! and broadcasts raw transactions. It implements the
//! [`UtxoSource`](zt_transaction::UtxoSource) and
//! [`Broadcaster`](zt_transaction::Broadcaster) traits consumed by the
//! transaction builder.
//!
//! # Example
//!
//! ```no_run
//! use zt_rpc::{RpcClient, RpcConfig};
//!
//! let client = RpcClient::new(RpcConfig {
//!     host: "http://127.0.0.1:18232".to_string(),
//!     user: "rpcuser".to_string(),
//!     password: "rpcpassword".to_string(),
//!     ..Default::default()
//! })
//! .unwrap();
//! ```

pub mod client;
pub mod error;
pub mod types;


pub use client::RpcClient;
pub use error::RpcError;
pub use types::{AddressBalance, BlockHeight, RpcConfig};
