//! Configuration types for crowdfund-client
//!
//! Manages global configuration including the node endpoint, the contract
//! address and call budget, wallet extension settings and display options.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default node WebSocket endpoint
pub const DEFAULT_NODE_URL: &str = "ws://127.0.0.1:9944";

/// Fixed gas limit attached to every mutating contract call
pub const DEFAULT_GAS_LIMIT: u64 = 100_000_000_000;

/// Assumed seconds per block
pub const DEFAULT_BLOCK_TIME_SECS: u64 = 6;

/// Name the client announces to wallet extensions
pub const DEFAULT_APP_NAME: &str = "Crowdfunding DApp";

/// Largest token decimals whose scale (10^d) fits in a U256
pub const MAX_TOKEN_DECIMALS: u8 = 77;

/// Global client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    pub node: NodeConfig,
    pub contract: ContractConfig,
    pub wallet: WalletConfig,
    pub display: DisplayConfig,
}

/// Chain node connection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// WebSocket URL of the node RPC endpoint
    pub ws_url: String,
}

/// Crowdfunding contract configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Deployed contract address (unset until the contract is deployed)
    pub address: Option<Address>,

    /// Gas limit for mutating calls; never estimated
    pub gas_limit: u64,
}

/// Wallet extension configuration
///
/// Key material is never stored here. Extensions read it from
/// `CROWDFUND_MNEMONIC` or `CROWDFUND_PRIVATE_KEYS`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Name announced when enabling the extension
    pub app_name: String,

    /// Number of accounts derived from a mnemonic
    pub account_count: u32,
}

/// Display and unit conversion settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimals of the native token
    pub token_decimals: u8,

    /// Maximum fraction digits shown for amounts
    pub display_decimals: u8,

    /// Assumed block time used for day/block conversion and polling
    pub block_time_secs: u64,

    /// Unit label shown next to amounts
    pub token_symbol: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            node: NodeConfig {
                ws_url: DEFAULT_NODE_URL.to_string(),
            },
            contract: ContractConfig {
                address: None,
                gas_limit: DEFAULT_GAS_LIMIT,
            },
            wallet: WalletConfig {
                app_name: DEFAULT_APP_NAME.to_string(),
                account_count: 5,
            },
            display: DisplayConfig {
                token_decimals: 18,
                display_decimals: 4,
                block_time_secs: DEFAULT_BLOCK_TIME_SECS,
                token_symbol: "tokens".to_string(),
            },
        }
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid contract address: {0}")]
    InvalidAddress(String),

    #[error("Config directory not found")]
    DirectoryNotFound,
}

/// Configuration overrides from CLI arguments or environment variables
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub node_url: Option<String>,
    pub contract_address: Option<Address>,
    pub gas_limit: Option<u64>,
    pub config_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Create empty overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Create overrides from environment variables
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self {
            node_url: std::env::var("CROWDFUND_NODE_URL").ok(),
            contract_address: std::env::var("CROWDFUND_CONTRACT_ADDRESS")
                .ok()
                .and_then(|s| match parse_address(&s) {
                    Ok(address) => Some(address),
                    Err(e) => {
                        log::warn!("Ignoring CROWDFUND_CONTRACT_ADDRESS: {}", e);
                        None
                    }
                }),
            gas_limit: std::env::var("CROWDFUND_GAS_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok()),
            config_dir: std::env::var("CROWDFUND_CONFIG_DIR").ok().map(PathBuf::from),
        }
    }

    /// Merge with another set of overrides (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        if other.node_url.is_some() {
            self.node_url = other.node_url;
        }
        if other.contract_address.is_some() {
            self.contract_address = other.contract_address;
        }
        if other.gas_limit.is_some() {
            self.gas_limit = other.gas_limit;
        }
        if other.config_dir.is_some() {
            self.config_dir = other.config_dir;
        }
        self
    }

    /// Config file location implied by these overrides
    pub fn config_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.config_dir {
            Some(dir) => Ok(dir.join("config.json")),
            None => default_config_path(),
        }
    }
}

/// Parse a contract address in `0x`-prefixed hex form
pub fn parse_address(s: &str) -> Result<Address, ConfigError> {
    Address::from_str(s.trim()).map_err(|e| ConfigError::InvalidAddress(format!("{}: {}", s, e)))
}

/// Get the default configuration directory path
///
/// Returns: `~/.crowdfund-client/`
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".crowdfund-client"))
        .ok_or(ConfigError::DirectoryNotFound)
}

/// Get the default configuration file path
///
/// Returns: `~/.crowdfund-client/config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(default_config_dir()?.join("config.json"))
}

/// Load configuration from file with overrides
///
/// # Priority (highest to lowest):
/// 1. CLI overrides (passed as argument)
/// 2. Environment variables
/// 3. Config file
/// 4. Defaults
///
/// The file location comes from the CLI overrides, then `CROWDFUND_CONFIG_DIR`,
/// then the default directory.
pub fn load_config(cli_overrides: ConfigOverrides) -> Result<GlobalConfig, ConfigError> {
    let overrides = ConfigOverrides::from_env().merge(cli_overrides);
    let path = overrides.config_path()?;

    let mut config = load_config_file(&path)?;
    apply_overrides(&mut config, overrides);
    validate(&config)?;

    Ok(config)
}

/// Read a config file, falling back to defaults when it does not exist
pub fn load_config_file(path: &Path) -> Result<GlobalConfig, ConfigError> {
    if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(serde_json::from_str(&contents)?)
    } else {
        log::debug!("No config at {}, using defaults", path.display());
        Ok(GlobalConfig::default())
    }
}

/// Save configuration to file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &GlobalConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;

    Ok(())
}

/// Apply configuration overrides (internal helper)
fn apply_overrides(config: &mut GlobalConfig, overrides: ConfigOverrides) {
    if let Some(url) = overrides.node_url {
        config.node.ws_url = url;
    }
    if let Some(address) = overrides.contract_address {
        config.contract.address = Some(address);
    }
    if let Some(gas_limit) = overrides.gas_limit {
        config.contract.gas_limit = gas_limit;
    }
}

fn validate(config: &GlobalConfig) -> Result<(), ConfigError> {
    if !(config.node.ws_url.starts_with("ws://") || config.node.ws_url.starts_with("wss://")) {
        return Err(ConfigError::Invalid(format!(
            "node URL must be a WebSocket URL, got '{}'",
            config.node.ws_url
        )));
    }
    if config.display.block_time_secs == 0 {
        return Err(ConfigError::Invalid("block time must be positive".to_string()));
    }
    if config.contract.gas_limit == 0 {
        return Err(ConfigError::Invalid("gas limit must be positive".to_string()));
    }
    if config.display.token_decimals > MAX_TOKEN_DECIMALS {
        return Err(ConfigError::Invalid(format!(
            "token decimals must be at most {}, got {}",
            MAX_TOKEN_DECIMALS, config.display.token_decimals
        )));
    }
    Ok(())
}
