//! Leak reports and usage snapshots

use crate::token::{CallSite, InstanceId};
use serde::Serialize;
use std::fmt;

/// Outstanding bytes of one token, as seen by an inspector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenUsage {
    pub token: &'static str,
    pub bytes: i64,
    /// Instances (including the anonymous one) still holding bytes.
    pub live_instances: usize,
}

/// One instance still holding bytes at audit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceLeak {
    pub instance: InstanceId,
    pub site: Option<CallSite>,
    pub bytes: i64,
}

/// One token whose aggregate is non-zero at audit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenLeak {
    pub token: &'static str,
    pub bytes: i64,
    /// Last allocation site of the anonymous (no-instance) allocations.
    pub anonymous_site: Option<CallSite>,
    pub instances: Vec<InstanceLeak>,
}

/// Result of scanning the ledger for outstanding allocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeakReport {
    pub leaks: Vec<TokenLeak>,
}

impl LeakReport {
    pub fn is_clean(&self) -> bool {
        self.leaks.is_empty()
    }

    pub fn leaked_bytes(&self) -> i64 {
        self.leaks.iter().map(|leak| leak.bytes).sum()
    }

    pub fn token(&self, name: &str) -> Option<&TokenLeak> {
        self.leaks.iter().find(|leak| leak.token == name)
    }
}

impl fmt::Display for TokenLeak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} bytes", self.token, self.bytes)?;
        if let Some(site) = &self.anonymous_site {
            write!(f, " (last anonymous allocation at {site})")?;
        }
        for instance in &self.instances {
            write!(f, "\n    instance {}", instance.instance)?;
            match &instance.site {
                Some(site) => write!(f, " allocated at {site}")?,
                None => write!(f, " (no call site)")?,
            }
            write!(f, ": {} bytes", instance.bytes)?;
        }
        Ok(())
    }
}

impl fmt::Display for LeakReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.leaks.is_empty() {
            return write!(f, "No GPU memory leaks detected.");
        }
        write!(
            f,
            "GPU memory leak detected: {} token(s) still hold {} bytes",
            self.leaks.len(),
            self.leaked_bytes()
        )?;
        for leak in &self.leaks {
            write!(f, "\n  {leak}")?;
        }
        Ok(())
    }
}
