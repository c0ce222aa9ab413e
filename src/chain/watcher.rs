//! Current block polling
//!
//! Re-reads the chain head on the assumed block time and publishes it on a
//! watch channel. The poll task lives exactly as long as the watcher.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::chain::connection::BlockSource;

/// Polls the current block number in the background
pub struct BlockWatcher {
    receiver: watch::Receiver<u64>,
    task: JoinHandle<()>,
}

impl BlockWatcher {
    /// Start polling `source` every `interval`
    ///
    /// The first read happens immediately. Failed reads are logged and the
    /// last known block is kept.
    pub fn spawn(source: Arc<dyn BlockSource>, interval: Duration) -> Self {
        Self::starting_at(source, interval, 0)
    }

    /// Like [`BlockWatcher::spawn`], with `initial` already seen
    ///
    /// Subscribers are only notified once the head moves past `initial`.
    pub fn starting_at(source: Arc<dyn BlockSource>, interval: Duration, initial: u64) -> Self {
        let (sender, receiver) = watch::channel(initial);

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                match source.block_number().await {
                    Ok(block) => {
                        sender.send_if_modified(|current| {
                            if *current != block {
                                *current = block;
                                true
                            } else {
                                false
                            }
                        });
                    }
                    Err(e) => log::warn!("Failed to get current block: {}", e),
                }
                if sender.is_closed() {
                    break;
                }
            }
        });

        Self { receiver, task }
    }

    /// Last observed block number (0 until the first successful read)
    pub fn current(&self) -> u64 {
        *self.receiver.borrow()
    }

    /// Receiver that is notified whenever the block number changes
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.receiver.clone()
    }
}

impl Drop for BlockWatcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}
