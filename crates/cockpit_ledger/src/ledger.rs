//! The allocation ledger
//!
//! Every accounting call funnels into a single lock-protected map of
//! token entries, each holding an aggregate counter plus a per-instance
//! breakdown. Counters never go negative; any contract violation is fatal.

use crate::error::LedgerError;
use crate::format::{texture_bytes, ComponentType, PixelFormat};
use crate::report::{InstanceLeak, LeakReport, TokenLeak, TokenUsage};
use crate::token::{CallSite, InstanceId, Token, TokenId};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Outstanding bytes of a single (token, instance) pair.
#[derive(Debug, Default)]
struct InstanceRecord {
    bytes: i64,
    last_site: Option<CallSite>,
}

#[derive(Debug)]
struct TokenEntry {
    name: &'static str,
    aggregate_bytes: i64,
    /// `None` is the anonymous instance used by calls without one.
    instances: HashMap<Option<InstanceId>, InstanceRecord>,
}

impl TokenEntry {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            aggregate_bytes: 0,
            instances: HashMap::new(),
        }
    }

    fn add(
        &mut self,
        instance: Option<InstanceId>,
        site: CallSite,
        bytes: u64,
    ) -> Result<(), LedgerError> {
        let overflow = |current| LedgerError::CounterOverflow {
            token: self.name,
            current,
            bytes,
        };
        let delta = i64::try_from(bytes).map_err(|_| overflow(self.aggregate_bytes))?;
        let aggregate = self
            .aggregate_bytes
            .checked_add(delta)
            .ok_or_else(|| overflow(self.aggregate_bytes))?;

        let current = self
            .instances
            .get(&instance)
            .map_or(0, |record| record.bytes);
        let instance_bytes = current.checked_add(delta).ok_or_else(|| overflow(current))?;

        self.aggregate_bytes = aggregate;
        let record = self.instances.entry(instance).or_default();
        record.bytes = instance_bytes;
        record.last_site = Some(site);
        Ok(())
    }

    fn remove(&mut self, instance: Option<InstanceId>, bytes: u64) -> Result<(), LedgerError> {
        let tracked = self
            .instances
            .get(&instance)
            .map_or(0, |record| record.bytes);
        let underflow = |tracked| LedgerError::Underflow {
            token: self.name,
            instance,
            tracked,
            bytes,
        };
        let delta = i64::try_from(bytes).map_err(|_| underflow(tracked))?;
        if delta > tracked {
            return Err(underflow(tracked));
        }
        if delta > self.aggregate_bytes {
            return Err(underflow(self.aggregate_bytes));
        }

        self.aggregate_bytes -= delta;
        let remaining = tracked - delta;
        if remaining == 0 {
            self.instances.remove(&instance);
        } else if let Some(record) = self.instances.get_mut(&instance) {
            record.bytes = remaining;
        }
        Ok(())
    }

    fn leak(&self) -> Option<TokenLeak> {
        if self.aggregate_bytes == 0 {
            return None;
        }
        let anonymous_site = self
            .instances
            .get(&None)
            .filter(|record| record.bytes != 0)
            .and_then(|record| record.last_site);
        let mut instances: Vec<InstanceLeak> = self
            .instances
            .iter()
            .filter(|(_, record)| record.bytes != 0)
            .filter_map(|(key, record)| {
                key.map(|instance| InstanceLeak {
                    instance,
                    site: record.last_site,
                    bytes: record.bytes,
                })
            })
            .collect();
        instances.sort_by_key(|leak| leak.instance);

        Some(TokenLeak {
            token: self.name,
            bytes: self.aggregate_bytes,
            anonymous_site,
            instances,
        })
    }
}

#[derive(Debug, Default)]
struct LedgerState {
    tokens: HashMap<TokenId, TokenEntry>,
}

impl LedgerState {
    fn entry(&mut self, token: &Token) -> &mut TokenEntry {
        self.tokens
            .entry(token.id())
            .or_insert_with(|| TokenEntry::new(token.name()))
    }

    fn remove(
        &mut self,
        token: &Token,
        instance: Option<InstanceId>,
        bytes: u64,
    ) -> Result<(), LedgerError> {
        match self.tokens.get_mut(&token.id()) {
            Some(entry) => entry.remove(instance, bytes),
            None => Err(LedgerError::Underflow {
                token: token.name(),
                instance,
                tracked: 0,
                bytes,
            }),
        }
    }

    fn audit(&self) -> LeakReport {
        let mut leaks: Vec<TokenLeak> = self.tokens.values().filter_map(TokenEntry::leak).collect();
        leaks.sort_by(|a, b| a.token.cmp(b.token));
        LeakReport { leaks }
    }
}

/// Ledger of outstanding GPU memory, grouped by token and instance.
///
/// A ledger starts inactive; every accounting call is a silent no-op until
/// [`Ledger::init`] runs and again after [`Ledger::fini`]. The process-wide
/// ledger behind the crate-level functions is just a `static Ledger`; tests
/// build their own.
///
/// All methods except `init` and `fini` may be called from any thread.
/// Callbacks handed to [`Ledger::enumerate`] run under the ledger lock and
/// must not call back into the same ledger.
#[derive(Debug)]
pub struct Ledger {
    active: AtomicBool,
    state: Mutex<Option<LedgerState>>,
}

impl Ledger {
    pub const fn new() -> Self {
        Self {
            active: AtomicBool::new(false),
            state: Mutex::new(None),
        }
    }

    /// Bring the ledger up. Initializing an active ledger is fatal.
    #[track_caller]
    pub fn init(&self) {
        {
            let mut state = self.state.lock();
            if state.is_none() {
                *state = Some(LedgerState::default());
                self.active.store(true, Ordering::Release);
                tracing::debug!("GPU memory ledger initialized");
                return;
            }
        }
        fatal(LedgerError::AlreadyInitialized)
    }

    /// Audit for leaks and tear the ledger down.
    ///
    /// Any token still holding bytes is fatal: the full leak report is
    /// logged and the process aborts with it. State is torn down before the
    /// audit runs.
    #[track_caller]
    pub fn fini(&self) {
        let state = self.state.lock().take();
        self.active.store(false, Ordering::Release);

        let Some(state) = state else {
            tracing::debug!("fini() on an inactive GPU memory ledger");
            return;
        };
        let report = state.audit();
        drop(state);

        if !report.is_clean() {
            fatal(LedgerError::Leaked(report));
        }
        tracing::debug!("GPU memory ledger shut down clean");
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Account a `width` x `height` texture allocation.
    #[allow(clippy::too_many_arguments)]
    #[track_caller]
    pub fn alloc(
        &self,
        token: &Token,
        instance: Option<InstanceId>,
        site: CallSite,
        format: PixelFormat,
        component: ComponentType,
        width: u32,
        height: u32,
    ) {
        if !self.is_active() {
            return;
        }
        match texture_bytes(format, component, width, height) {
            Ok(bytes) => self.alloc_bytes(token, instance, site, bytes),
            Err(err) => fatal(err),
        }
    }

    /// Release a texture previously accounted with [`Ledger::alloc`].
    #[track_caller]
    pub fn free(
        &self,
        token: &Token,
        instance: Option<InstanceId>,
        format: PixelFormat,
        component: ComponentType,
        width: u32,
        height: u32,
    ) {
        if !self.is_active() {
            return;
        }
        match texture_bytes(format, component, width, height) {
            Ok(bytes) => self.free_bytes(token, instance, bytes),
            Err(err) => fatal(err),
        }
    }

    /// Account `bytes` of a non-texture resource (vertex, index buffers).
    #[track_caller]
    pub fn alloc_bytes(
        &self,
        token: &Token,
        instance: Option<InstanceId>,
        site: CallSite,
        bytes: u64,
    ) {
        if bytes == 0 || !self.is_active() {
            return;
        }
        let result = match self.state.lock().as_mut() {
            Some(state) => state.entry(token).add(instance, site, bytes),
            None => return,
        };
        match result {
            Ok(()) => tracing::trace!(token = token.name(), ?instance, bytes, %site, "alloc"),
            Err(err) => fatal(err),
        }
    }

    /// Release `bytes` previously accounted with [`Ledger::alloc_bytes`].
    ///
    /// Freeing more than is tracked for the (token, instance) pair is fatal.
    #[track_caller]
    pub fn free_bytes(&self, token: &Token, instance: Option<InstanceId>, bytes: u64) {
        if bytes == 0 || !self.is_active() {
            return;
        }
        let result = match self.state.lock().as_mut() {
            Some(state) => state.remove(token, instance, bytes),
            None => return,
        };
        match result {
            Ok(()) => tracing::trace!(token = token.name(), ?instance, bytes, "free"),
            Err(err) => fatal(err),
        }
    }

    /// Bytes outstanding across every token, saturating at `u64::MAX`.
    ///
    /// Each token's counter is bounded on its own, so the sum over many
    /// tokens can exceed `u64`.
    pub fn total_bytes(&self) -> u64 {
        self.state.lock().as_ref().map_or(0, |state| {
            state
                .tokens
                .values()
                .map(|entry| entry.aggregate_bytes.unsigned_abs())
                .fold(0u64, u64::saturating_add)
        })
    }

    /// Call `f(token_name, aggregate_bytes)` once per token that has ever
    /// been allocated against. Order is unspecified.
    pub fn enumerate<F>(&self, mut f: F)
    where
        F: FnMut(&'static str, i64),
    {
        if let Some(state) = self.state.lock().as_ref() {
            for entry in state.tokens.values() {
                f(entry.name, entry.aggregate_bytes);
            }
        }
    }

    /// Owned copy of every token's usage, sorted by token name.
    pub fn snapshot(&self) -> Vec<TokenUsage> {
        let mut usage: Vec<TokenUsage> = self
            .state
            .lock()
            .as_ref()
            .map(|state| {
                state
                    .tokens
                    .values()
                    .map(|entry| TokenUsage {
                        token: entry.name,
                        bytes: entry.aggregate_bytes,
                        live_instances: entry.instances.len(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        usage.sort_by(|a, b| a.token.cmp(b.token));
        usage
    }

    /// Leak scan of the current state, without tearing anything down.
    pub fn audit(&self) -> LeakReport {
        self.state
            .lock()
            .as_ref()
            .map(LedgerState::audit)
            .unwrap_or_default()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cold]
#[track_caller]
fn fatal(err: LedgerError) -> ! {
    tracing::error!("{err}");
    terminate(err)
}

// Unit tests observe violations as panics.
#[cfg(test)]
#[track_caller]
fn terminate(err: LedgerError) -> ! {
    panic!("{err}")
}

/// End the process on the spot, whatever the panic strategy and whichever
/// thread hit the violation.
#[cfg(not(test))]
#[track_caller]
fn terminate(err: LedgerError) -> ! {
    let location = std::panic::Location::caller();
    eprintln!("fatal GPU memory ledger violation at {location}: {err}");
    std::process::abort()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call_site;
    use rayon::prelude::*;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    static EFIS: Token = Token::new("efis_textures");
    static MAP: Token = Token::new("map_tiles");
    static VBO: Token = Token::new("quad_vbo");
    static FONTS: Token = Token::new("font_atlas");

    fn active() -> Ledger {
        let ledger = Ledger::new();
        ledger.init();
        ledger
    }

    fn token_bytes(ledger: &Ledger, name: &str) -> Option<i64> {
        let mut found = None;
        ledger.enumerate(|token, bytes| {
            if token == name {
                found = Some(bytes);
            }
        });
        found
    }

    #[test]
    fn inactive_ledger_ignores_everything() {
        let ledger = Ledger::new();
        assert!(!ledger.is_active());

        ledger.alloc(
            &EFIS,
            None,
            call_site!(),
            PixelFormat::Rgba,
            ComponentType::UnsignedByte,
            64,
            64,
        );
        ledger.alloc_bytes(&VBO, Some(InstanceId::next()), call_site!(), 512);
        ledger.free_bytes(&VBO, None, 1 << 20);

        assert_eq!(ledger.total_bytes(), 0);
        let mut calls = 0;
        ledger.enumerate(|_, _| calls += 1);
        assert_eq!(calls, 0);
        assert!(ledger.snapshot().is_empty());
    }

    #[test]
    fn matched_texture_alloc_free_returns_to_zero() {
        let ledger = active();
        ledger.alloc(
            &EFIS,
            None,
            call_site!(),
            PixelFormat::Rgba,
            ComponentType::UnsignedByte,
            64,
            64,
        );
        assert_eq!(ledger.total_bytes(), 16384);
        assert_eq!(token_bytes(&ledger, "efis_textures"), Some(16384));

        ledger.free(
            &EFIS,
            None,
            PixelFormat::Rgba,
            ComponentType::UnsignedByte,
            64,
            64,
        );
        assert_eq!(ledger.total_bytes(), 0);
        assert!(ledger.audit().is_clean());
        ledger.fini();
        assert!(!ledger.is_active());
    }

    #[test]
    fn free_restores_prior_value_exactly() {
        let ledger = active();
        ledger.alloc_bytes(&EFIS, None, call_site!(), 1000);
        let before = ledger.total_bytes();

        ledger.alloc(
            &EFIS,
            None,
            call_site!(),
            PixelFormat::Red,
            ComponentType::Float,
            64,
            64,
        );
        assert_eq!(ledger.total_bytes(), before + 16384);
        ledger.free(&EFIS, None, PixelFormat::Red, ComponentType::Float, 64, 64);
        assert_eq!(ledger.total_bytes(), before);

        ledger.free_bytes(&EFIS, None, 1000);
        ledger.fini();
    }

    #[test]
    fn totals_are_order_independent() {
        let ops: [(&Token, u64); 5] = [(&EFIS, 300), (&MAP, 70), (&VBO, 5), (&EFIS, 12), (&MAP, 1)];
        let orders: [[usize; 5]; 3] = [[0, 1, 2, 3, 4], [4, 3, 2, 1, 0], [2, 0, 4, 1, 3]];

        for order in orders {
            let ledger = active();
            for &i in &order {
                let (token, bytes) = ops[i];
                ledger.alloc_bytes(token, None, call_site!(), bytes);
            }
            ledger.free_bytes(&EFIS, None, 12);

            let mut sum = 0;
            ledger.enumerate(|_, bytes| sum += bytes);
            assert_eq!(ledger.total_bytes(), 376);
            assert_eq!(sum, 376);
            assert_eq!(token_bytes(&ledger, "efis_textures"), Some(300));
            assert_eq!(token_bytes(&ledger, "map_tiles"), Some(71));

            ledger.free_bytes(&EFIS, None, 300);
            ledger.free_bytes(&MAP, None, 71);
            ledger.free_bytes(&VBO, None, 5);
            ledger.fini();
        }
    }

    #[test]
    fn enumerate_visits_each_touched_token_once() {
        let ledger = active();
        let mut calls = 0;
        ledger.enumerate(|_, _| calls += 1);
        assert_eq!(calls, 0);

        ledger.alloc_bytes(&EFIS, None, call_site!(), 10);
        ledger.alloc_bytes(&EFIS, Some(InstanceId::next()), call_site!(), 10);
        ledger.alloc_bytes(&MAP, None, call_site!(), 20);
        ledger.alloc_bytes(&FONTS, None, call_site!(), 30);
        ledger.free_bytes(&FONTS, None, 30);

        let mut seen = Vec::new();
        ledger.enumerate(|token, bytes| seen.push((token, bytes)));
        seen.sort();
        assert_eq!(
            seen,
            vec![("efis_textures", 20), ("font_atlas", 0), ("map_tiles", 20)]
        );
    }

    #[test]
    fn zero_byte_calls_create_nothing() {
        let ledger = active();
        ledger.alloc_bytes(&EFIS, None, call_site!(), 0);
        ledger.alloc(
            &MAP,
            None,
            call_site!(),
            PixelFormat::Rgb,
            ComponentType::UnsignedByte,
            0,
            128,
        );
        ledger.free_bytes(&VBO, None, 0);
        assert!(ledger.snapshot().is_empty());
        ledger.fini();
    }

    #[test]
    fn overlapping_allocations_on_one_instance_accumulate() {
        let ledger = active();
        let instance = Some(InstanceId::next());
        ledger.alloc_bytes(&VBO, instance, CallSite::new("quads.rs", 10), 256);
        ledger.alloc_bytes(&VBO, instance, CallSite::new("quads.rs", 20), 64);

        let report = ledger.audit();
        let leak = report.token("quad_vbo").unwrap();
        assert_eq!(leak.bytes, 320);
        assert_eq!(leak.instances.len(), 1);
        assert_eq!(leak.instances[0].bytes, 320);
        assert_eq!(leak.instances[0].site, Some(CallSite::new("quads.rs", 20)));

        ledger.free_bytes(&VBO, instance, 256);
        ledger.free_bytes(&VBO, instance, 64);
        ledger.fini();
    }

    #[test]
    fn drained_instances_are_dropped() {
        let ledger = active();
        let a = Some(InstanceId::next());
        let b = Some(InstanceId::next());
        ledger.alloc_bytes(&MAP, a, call_site!(), 100);
        ledger.alloc_bytes(&MAP, b, call_site!(), 100);
        assert_eq!(ledger.snapshot()[0].live_instances, 2);

        ledger.free_bytes(&MAP, a, 100);
        let usage = ledger.snapshot();
        assert_eq!(usage.len(), 1);
        assert_eq!(usage[0].bytes, 100);
        assert_eq!(usage[0].live_instances, 1);

        ledger.free_bytes(&MAP, b, 100);
        ledger.fini();
    }

    #[test]
    fn audit_attributes_instances_to_call_sites() {
        let ledger = active();
        let texture = InstanceId::from_raw(0xbeef);
        ledger.alloc(
            &EFIS,
            Some(texture),
            CallSite::new("src/efis/pfd.rs", 41),
            PixelFormat::Rgba,
            ComponentType::UnsignedByte,
            32,
            32,
        );
        ledger.alloc_bytes(&FONTS, None, CallSite::new("fonts.rs", 9), 77);

        let report = ledger.audit();
        assert_eq!(report.leaks.len(), 2);
        assert_eq!(report.leaked_bytes(), 4096 + 77);

        let efis = report.token("efis_textures").unwrap();
        assert_eq!(efis.anonymous_site, None);
        assert_eq!(efis.instances[0].instance, texture);
        assert_eq!(efis.instances[0].site, Some(CallSite::new("pfd.rs", 41)));

        let fonts = report.token("font_atlas").unwrap();
        assert!(fonts.instances.is_empty());
        assert_eq!(fonts.anonymous_site, Some(CallSite::new("fonts.rs", 9)));

        // audit leaves the ledger untouched
        assert!(ledger.is_active());
        assert_eq!(ledger.total_bytes(), 4096 + 77);
    }

    #[test]
    #[should_panic(expected = "map_tiles: 512 bytes")]
    fn fini_with_outstanding_bytes_is_fatal() {
        let ledger = active();
        ledger.alloc_bytes(&MAP, None, call_site!(), 512);
        ledger.fini();
    }

    #[test]
    #[should_panic(expected = "allocated at tiles.rs:77")]
    fn fini_names_leaked_instance_site() {
        let ledger = active();
        ledger.alloc_bytes(
            &MAP,
            Some(InstanceId::next()),
            CallSite::new("src/map/tiles.rs", 77),
            128,
        );
        ledger.fini();
    }

    #[test]
    fn fatal_fini_still_tears_down() {
        let ledger = active();
        ledger.alloc_bytes(&EFIS, None, call_site!(), 1);

        let result = catch_unwind(AssertUnwindSafe(|| ledger.fini()));
        assert!(result.is_err());
        assert!(!ledger.is_active());
        assert_eq!(ledger.total_bytes(), 0);

        // a fresh cycle starts from an empty ledger
        ledger.init();
        assert!(ledger.snapshot().is_empty());
        ledger.fini();
    }

    #[test]
    #[should_panic(expected = "exceeds the 100 bytes tracked")]
    fn free_beyond_tracked_is_fatal() {
        let ledger = active();
        ledger.alloc_bytes(&VBO, None, call_site!(), 100);
        ledger.free_bytes(&VBO, None, 101);
    }

    #[test]
    #[should_panic(expected = "exceeds the 0 bytes tracked for instance")]
    fn free_of_unknown_instance_is_fatal() {
        let ledger = active();
        ledger.alloc_bytes(&VBO, Some(InstanceId::from_raw(1)), call_site!(), 100);
        ledger.free_bytes(&VBO, Some(InstanceId::from_raw(2)), 100);
    }

    #[test]
    #[should_panic(expected = "exceeds the 0 bytes tracked for the token")]
    fn free_without_alloc_is_fatal() {
        let ledger = active();
        ledger.free(
            &EFIS,
            None,
            PixelFormat::Rgba,
            ComponentType::UnsignedByte,
            1,
            1,
        );
    }

    #[test]
    #[should_panic(expected = "initialized twice")]
    fn double_init_is_fatal() {
        let ledger = active();
        ledger.init();
    }

    #[test]
    #[should_panic(expected = "unsupported texel layout")]
    fn unsupported_layout_is_fatal() {
        let ledger = active();
        ledger.alloc(
            &EFIS,
            None,
            call_site!(),
            PixelFormat::DepthStencil,
            ComponentType::UnsignedByte,
            16,
            16,
        );
    }

    #[test]
    #[should_panic(expected = "counter overflow")]
    fn counter_overflow_is_fatal() {
        let ledger = active();
        ledger.alloc_bytes(&EFIS, None, call_site!(), i64::MAX as u64);
        ledger.alloc_bytes(&EFIS, None, call_site!(), 1);
    }

    #[test]
    fn failed_free_changes_nothing() {
        let ledger = active();
        ledger.alloc_bytes(&VBO, None, call_site!(), 8);

        let result = catch_unwind(AssertUnwindSafe(|| ledger.free_bytes(&VBO, None, 9)));
        assert!(result.is_err());

        // lock is not poisoned and the failed free changed nothing
        assert_eq!(ledger.total_bytes(), 8);
        ledger.free_bytes(&VBO, None, 8);

        let result = catch_unwind(AssertUnwindSafe(|| ledger.free_bytes(&FONTS, None, 1)));
        assert!(result.is_err());
        let usage = ledger.snapshot();
        assert!(usage.iter().all(|u| u.token != "font_atlas"));
        ledger.fini();
    }

    #[test]
    fn total_saturates_across_tokens() {
        let ledger = active();
        for token in [&EFIS, &MAP, &VBO] {
            ledger.alloc_bytes(token, None, call_site!(), i64::MAX as u64);
        }
        assert_eq!(ledger.total_bytes(), u64::MAX);

        let mut sum = 0u64;
        ledger.enumerate(|_, bytes| sum = sum.saturating_add(bytes as u64));
        assert_eq!(sum, u64::MAX);

        for token in [&EFIS, &MAP, &VBO] {
            ledger.free_bytes(token, None, i64::MAX as u64);
        }
        assert_eq!(ledger.total_bytes(), 0);
        ledger.fini();
    }

    #[test]
    fn concurrent_accounting_balances() {
        let ledger = active();
        let tokens: [&Token; 3] = [&EFIS, &MAP, &VBO];

        (0..3000u64).into_par_iter().for_each(|i| {
            let token = tokens[(i % 3) as usize];
            let instance = Some(InstanceId::from_raw(i));
            ledger.alloc_bytes(token, instance, call_site!(), i + 1);
            let _ = ledger.total_bytes();
            ledger.free_bytes(token, instance, i + 1);
        });

        assert_eq!(ledger.total_bytes(), 0);
        assert!(ledger.audit().is_clean());
        ledger.fini();
    }

    #[test]
    fn concurrent_net_totals_add_up() {
        let ledger = active();

        (0..1000u64).into_par_iter().for_each(|i| {
            let token = if i % 2 == 0 { &EFIS } else { &MAP };
            ledger.alloc_bytes(token, None, call_site!(), 3);
            if i % 4 == 0 {
                ledger.free_bytes(token, None, 1);
            }
        });

        // 1000 * 3 allocated, 250 frees of 1 byte, all on the even token
        assert_eq!(ledger.total_bytes(), 2750);
        assert_eq!(token_bytes(&ledger, "efis_textures"), Some(1250));
        assert_eq!(token_bytes(&ledger, "map_tiles"), Some(1500));
    }

    #[test]
    fn snapshot_serializes() {
        let ledger = active();
        ledger.alloc_bytes(&FONTS, None, call_site!(), 2048);
        let json = serde_json::to_value(ledger.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "token": "font_atlas", "bytes": 2048, "live_instances": 1 }])
        );
    }
}
