//! Crowdfund Client
//!
//! Client for an on-chain crowdfunding contract: connects to a chain node
//! over WebSocket, obtains accounts from a wallet extension, and lists,
//! creates and funds campaigns.

pub mod chain;
pub mod cli;
pub mod config;
pub mod contract;
pub mod manager;
pub mod types;
pub mod view;
pub mod wallet;
