//! Step budgets for the exponential algorithms.
//!
//! The subset-DP TSP and the push-based shortest-path relaxation can run for a very long time.
//! Both accept a [`Budget`]; every unit of work is charged against it and the call fails with
//! [`Error::BudgetExhausted`] once the limit is crossed.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Budget {
    limit: Option<u64>,
    used: u64,
}

impl Budget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn steps(limit: u64) -> Self {
        Self {
            limit: Some(limit),
            used: 0,
        }
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    pub fn used(&self) -> u64 {
        self.used
    }

    pub fn remaining(&self) -> Option<u64> {
        self.limit.map(|limit| limit.saturating_sub(self.used))
    }

    pub fn tick(&mut self) -> Result<()> {
        self.charge(1)
    }

    pub fn charge(&mut self, steps: u64) -> Result<()> {
        self.used = self.used.saturating_add(steps);
        match self.limit {
            Some(limit) if self.used > limit => {
                tracing::warn!(limit, used = self.used, "step budget exhausted");
                Err(Error::BudgetExhausted { limit })
            }
            _ => Ok(()),
        }
    }
}
