//! Identities the ledger accounts against
//!
//! Tokens group allocations by subsystem, instances split a token into
//! individually attributable resources, and call sites say where the
//! most recent allocation came from.

use once_cell::sync::OnceCell;
use serde::Serialize;
use std::fmt;
use std::panic::Location;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

static NEXT_TOKEN_ID: AtomicU32 = AtomicU32::new(1);
static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a [`Token`], assigned on first use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(u32);

impl TokenId {
    pub fn index(&self) -> u32 {
        self.0
    }
}

/// Symbolic accounting group, declared once as a `static`.
///
/// Two tokens with the same name are still distinct tokens; identity comes
/// from the declaration, not the string.
///
/// ```ignore
/// static EFIS_TEXTURES: Token = Token::new("efis_textures");
/// ```
pub struct Token {
    name: &'static str,
    id: OnceCell<TokenId>,
}

impl Token {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            id: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn id(&self) -> TokenId {
        *self
            .id
            .get_or_init(|| TokenId(NEXT_TOKEN_ID.fetch_add(1, Ordering::Relaxed)))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("name", &self.name)
            .field("id", &self.id.get())
            .finish()
    }
}

/// Declare a `static` [`Token`], named after its identifier unless a name
/// is given.
///
/// ```ignore
/// declare_token!(EFIS_TEXTURES);
/// declare_token!(pub MAP_TILES, "moving_map_tiles");
/// ```
#[macro_export]
macro_rules! declare_token {
    ($vis:vis $ident:ident) => {
        $vis static $ident: $crate::Token = $crate::Token::new(stringify!($ident));
    };
    ($vis:vis $ident:ident, $name:expr) => {
        $vis static $ident: $crate::Token = $crate::Token::new($name);
    };
}

/// Opaque discriminator for one resource accounted under a token.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct InstanceId(u64);

impl InstanceId {
    /// Mint a process-unique instance id.
    pub fn next() -> Self {
        Self(NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap a handle the caller already owns (a buffer id, a slot index).
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Source location of an allocating call, file reduced to its base name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub fn new(file: &'static str, line: u32) -> Self {
        Self {
            file: short_file_name(file),
            line,
        }
    }

    /// Location of whoever called the `#[track_caller]` function this runs in.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(location.file(), location.line())
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Capture the current source location as a [`CallSite`].
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(file!(), line!())
    };
}

fn short_file_name(path: &'static str) -> &'static str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIRST: Token = Token::new("shared_name");
    static SECOND: Token = Token::new("shared_name");

    declare_token!(PFD_TEXTURES);
    declare_token!(MAP_TILES, "moving_map_tiles");

    #[test]
    fn token_identity_is_per_declaration() {
        assert_eq!(FIRST.name(), SECOND.name());
        assert_ne!(FIRST.id(), SECOND.id());
        assert_eq!(FIRST.id(), FIRST.id());
    }

    #[test]
    fn declared_tokens_are_named_from_identifier() {
        assert_eq!(PFD_TEXTURES.name(), "PFD_TEXTURES");
        assert_eq!(MAP_TILES.name(), "moving_map_tiles");
    }

    #[test]
    fn minted_instances_are_unique() {
        let a = InstanceId::next();
        let b = InstanceId::next();
        assert_ne!(a, b);
        assert_eq!(InstanceId::from_raw(42).raw(), 42);
        assert_eq!(InstanceId::from_raw(255).to_string(), "0xff");
    }

    #[test]
    fn call_site_keeps_only_base_name() {
        let site = CallSite::new("src/avionics/efis.rs", 88);
        assert_eq!(site.file(), "efis.rs");
        assert_eq!(site.to_string(), "efis.rs:88");

        let windows = CallSite::new("C:\\plugin\\src\\mfd.rs", 7);
        assert_eq!(windows.file(), "mfd.rs");
    }

    #[test]
    fn call_site_macro_points_here() {
        let site = call_site!();
        assert_eq!(site.file(), "token.rs");
        assert_eq!(site.line(), line!() - 2);
    }

    #[track_caller]
    fn captured() -> CallSite {
        CallSite::caller()
    }

    #[test]
    fn track_caller_reports_the_caller() {
        let site = captured();
        assert_eq!(site.file(), "token.rs");
        assert_eq!(site.line(), line!() - 2);
    }
}
