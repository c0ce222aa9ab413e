//! Wallet extension bridge
//!
//! Key custody lives outside this client. An extension hands out account
//! addresses and per-account signers; nothing here generates or stores keys.

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};
use async_trait::async_trait;
use std::str::FromStr;

use crate::config::WalletConfig;
use crate::types::InjectedAccount;

/// Environment variable holding a BIP39 phrase
pub const MNEMONIC_ENV: &str = "CROWDFUND_MNEMONIC";

/// Environment variable holding comma-separated hex private keys
pub const PRIVATE_KEYS_ENV: &str = "CROWDFUND_PRIVATE_KEYS";

/// Wallet extension errors
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Key derivation failed: {0}")]
    Derivation(String),

    #[error("Account {0} is not managed by this extension")]
    UnknownAccount(Address),
}

/// Metadata returned when an extension is enabled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionInfo {
    pub name: String,
    pub version: String,
}

/// Bridge to an external key-custody service
#[async_trait]
pub trait WalletExtension: Send + Sync {
    /// Extension name shown next to its accounts
    fn name(&self) -> &str;

    /// Authorise `app_name`; an empty list means no extension answered
    async fn enable(&self, app_name: &str) -> Result<Vec<ExtensionInfo>, WalletError>;

    /// Accounts the extension exposes
    async fn accounts(&self) -> Result<Vec<InjectedAccount>, WalletError>;

    /// Transaction signer for one account
    async fn signer(&self, address: Address) -> Result<EthereumWallet, WalletError>;
}

/// Extension backed by keys supplied through the environment
pub struct LocalExtension {
    name: String,
    signers: Vec<(InjectedAccount, PrivateKeySigner)>,
}

impl LocalExtension {
    /// Derive `count` accounts from a BIP39 phrase (m/44'/60'/0'/0/i)
    pub fn from_mnemonic(phrase: &str, count: u32) -> Result<Self, WalletError> {
        let phrase = phrase.trim();
        bip39::Mnemonic::parse(phrase).map_err(|e| WalletError::InvalidMnemonic(e.to_string()))?;

        let name = "mnemonic".to_string();
        let mut signers = Vec::with_capacity(count as usize);
        for index in 0..count {
            let signer = MnemonicBuilder::<English>::default()
                .phrase(phrase)
                .index(index)
                .map_err(|e| WalletError::Derivation(e.to_string()))?
                .build()
                .map_err(|e| WalletError::Derivation(e.to_string()))?;

            let account = InjectedAccount {
                address: signer.address(),
                name: format!("Account {}", index + 1),
                source: name.clone(),
            };
            signers.push((account, signer));
        }

        Ok(Self { name, signers })
    }

    /// Accounts from comma-separated hex private keys
    pub fn from_private_keys(keys: &str) -> Result<Self, WalletError> {
        let name = "private-keys".to_string();
        let mut signers = Vec::new();
        for (index, key) in keys
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .enumerate()
        {
            let signer = PrivateKeySigner::from_str(key)
                .map_err(|e| WalletError::InvalidPrivateKey(format!("key #{}: {}", index + 1, e)))?;

            let account = InjectedAccount {
                address: signer.address(),
                name: format!("Key {}", index + 1),
                source: name.clone(),
            };
            signers.push((account, signer));
        }

        Ok(Self { name, signers })
    }

    /// Build the configured extension from the environment
    ///
    /// Returns `None` when neither `CROWDFUND_MNEMONIC` nor
    /// `CROWDFUND_PRIVATE_KEYS` is set. The mnemonic wins when both are.
    pub fn from_env(config: &WalletConfig) -> Result<Option<Self>, WalletError> {
        if let Ok(phrase) = std::env::var(MNEMONIC_ENV) {
            log::debug!("Using mnemonic wallet extension");
            return Self::from_mnemonic(&phrase, config.account_count).map(Some);
        }
        if let Ok(keys) = std::env::var(PRIVATE_KEYS_ENV) {
            log::debug!("Using private key wallet extension");
            return Self::from_private_keys(&keys).map(Some);
        }
        Ok(None)
    }
}

#[async_trait]
impl WalletExtension for LocalExtension {
    fn name(&self) -> &str {
        &self.name
    }

    async fn enable(&self, app_name: &str) -> Result<Vec<ExtensionInfo>, WalletError> {
        log::info!("Extension '{}' enabled for {}", self.name, app_name);
        Ok(vec![ExtensionInfo {
            name: self.name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }])
    }

    async fn accounts(&self) -> Result<Vec<InjectedAccount>, WalletError> {
        Ok(self.signers.iter().map(|(account, _)| account.clone()).collect())
    }

    async fn signer(&self, address: Address) -> Result<EthereumWallet, WalletError> {
        self.signers
            .iter()
            .find(|(account, _)| account.address == address)
            .map(|(_, signer)| EthereumWallet::from(signer.clone()))
            .ok_or(WalletError::UnknownAccount(address))
    }
}

impl std::fmt::Debug for LocalExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalExtension")
            .field("name", &self.name)
            .field("accounts", &self.signers.len())
            .finish()
    }
}
