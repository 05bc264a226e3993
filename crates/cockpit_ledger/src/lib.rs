//! Cockpit Ledger - GPU memory leak tracking
//!
//! Shadows graphics-memory allocations (textures, buffers) with byte
//! counters so that leaks surface as a hard failure at plugin shutdown
//! instead of as slow VRAM exhaustion.
//!
//! Allocations are tracked in a two-level hierarchy:
//! - a [`Token`] names a block of functionality (`efis_textures`,
//!   `custom_drawing_pbo`, ...)
//!   - each token can split its bytes by [`InstanceId`], remembering the
//!     [`CallSite`] of the most recent allocation for every instance
//!
//! # Usage
//!
//! ```ignore
//! use cockpit_ledger::{call_site, declare_token, ComponentType, PixelFormat};
//!
//! declare_token!(EFIS_TEXTURES);
//!
//! cockpit_ledger::init();
//! cockpit_ledger::alloc(&EFIS_TEXTURES, None, call_site!(),
//!     PixelFormat::Rgba, ComponentType::UnsignedByte, 1024, 1024);
//! // ...
//! cockpit_ledger::free(&EFIS_TEXTURES, None,
//!     PixelFormat::Rgba, ComponentType::UnsignedByte, 1024, 1024);
//! cockpit_ledger::fini(); // aborts with a leak report if anything is left
//! ```
//!
//! Until [`init`] runs every accounting call is a no-op, so the tracking
//! costs nothing outside the plugin lifetime.

mod error;
pub mod format;
mod ledger;
mod report;
pub mod token;

pub use error::LedgerError;
pub use format::{bytes_per_texel, texture_bytes, ComponentType, PixelFormat};
pub use ledger::Ledger;
pub use report::{InstanceLeak, LeakReport, TokenLeak, TokenUsage};
pub use token::{CallSite, InstanceId, Token, TokenId};

static GLOBAL: Ledger = Ledger::new();

/// The process-wide ledger behind the free functions of this crate.
pub fn global() -> &'static Ledger {
    &GLOBAL
}

/// Bring the process-wide ledger up. Fatal if it is already active.
#[track_caller]
pub fn init() {
    GLOBAL.init();
}

/// Audit and tear down the process-wide ledger; fatal on any leak.
#[track_caller]
pub fn fini() {
    GLOBAL.fini();
}

pub fn is_active() -> bool {
    GLOBAL.is_active()
}

#[allow(clippy::too_many_arguments)]
#[track_caller]
pub fn alloc(
    token: &Token,
    instance: Option<InstanceId>,
    site: CallSite,
    format: PixelFormat,
    component: ComponentType,
    width: u32,
    height: u32,
) {
    GLOBAL.alloc(token, instance, site, format, component, width, height);
}

#[track_caller]
pub fn free(
    token: &Token,
    instance: Option<InstanceId>,
    format: PixelFormat,
    component: ComponentType,
    width: u32,
    height: u32,
) {
    GLOBAL.free(token, instance, format, component, width, height);
}

#[track_caller]
pub fn alloc_bytes(token: &Token, instance: Option<InstanceId>, site: CallSite, bytes: u64) {
    GLOBAL.alloc_bytes(token, instance, site, bytes);
}

#[track_caller]
pub fn free_bytes(token: &Token, instance: Option<InstanceId>, bytes: u64) {
    GLOBAL.free_bytes(token, instance, bytes);
}

/// Bytes outstanding in the process-wide ledger. Useful for estimating
/// the GPU memory load of custom avionics code.
pub fn total_bytes() -> u64 {
    GLOBAL.total_bytes()
}

pub fn enumerate<F>(f: F)
where
    F: FnMut(&'static str, i64),
{
    GLOBAL.enumerate(f);
}

pub fn snapshot() -> Vec<TokenUsage> {
    GLOBAL.snapshot()
}

pub fn audit() -> LeakReport {
    GLOBAL.audit()
}

/// Run a block only while the process-wide ledger is active
#[macro_export]
macro_rules! if_tracking {
    ($($tt:tt)*) => {
        if $crate::is_active() {
            $($tt)*
        }
    };
}
