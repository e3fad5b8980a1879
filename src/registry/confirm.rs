//! Confirmation polling — bounded backoff wait for chain indexing.
//!
//! A broadcast hash is not proof of inclusion; the node indexes the
//! transaction some time after broadcast. This module polls `tx_info` on a
//! bounded exponential schedule and reports exhaustion as an explicit
//! [`ChainError::Unconfirmed`] instead of guessing.

use std::time::Duration;

use crate::chain::{ChainNode, TxInfo};
use crate::error::ChainError;

/// Polling schedule for transaction confirmation.
#[derive(Debug, Clone)]
pub struct ConfirmConfig {
    /// Wait before the first lookup, giving the node time to index.
    pub initial_delay: Duration,
    /// Total lookups before giving up.
    pub max_attempts: u32,
    /// Multiplier applied to the delay after each missed lookup.
    pub backoff_factor: f64,
    /// Upper bound on any single delay.
    pub max_delay: Duration,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(1000),
            max_attempts: 5,
            backoff_factor: 2.0,
            max_delay: Duration::from_secs(8),
        }
    }
}

impl ConfirmConfig {
    /// Delay preceding a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let ms =
            self.initial_delay.as_millis() as f64 * self.backoff_factor.powi(attempt as i32);
        Duration::from_millis(ms.min(self.max_delay.as_millis() as f64) as u64)
    }
}

/// Poll the node until the transaction is indexed or the attempt budget is
/// exhausted.
pub async fn wait_for_inclusion<C: ChainNode>(
    node: &C,
    txhash: &str,
    config: &ConfirmConfig,
) -> Result<TxInfo, ChainError> {
    for attempt in 0..config.max_attempts {
        futures_timer::Delay::new(config.delay_for_attempt(attempt)).await;
        if let Some(info) = node.tx_info(txhash).await? {
            return Ok(info);
        }
        tracing::debug!(attempt, txhash, "transaction not indexed yet");
    }
    Err(ChainError::Unconfirmed {
        attempts: config.max_attempts,
    })
}
