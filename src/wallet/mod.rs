//! Wallet extension layer
//!
//! Enumerates accounts and hands out per-account signers.

pub mod extension;

pub use extension::{
    ExtensionInfo, LocalExtension, WalletError, WalletExtension, MNEMONIC_ENV, PRIVATE_KEYS_ENV,
};
