use crate::format::{ComponentType, PixelFormat};
use crate::report::LeakReport;
use crate::token::InstanceId;
use thiserror::Error;

/// Contract violations detected by the ledger.
///
/// None of these are recoverable: the public entry points log the violation
/// and abort the process with its message.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger initialized twice without an intervening fini()")]
    AlreadyInitialized,

    #[error("unknown GL pixel format {0:#x}")]
    UnknownPixelFormat(u32),

    #[error("unknown GL component type {0:#x}")]
    UnknownComponentType(u32),

    #[error("unsupported texel layout: format {format:?} with component type {component:?}")]
    UnsupportedTexelLayout {
        format: PixelFormat,
        component: ComponentType,
    },

    #[error("texture size {width}x{height} overflows the byte counter")]
    TextureTooLarge { width: u32, height: u32 },

    #[error("counter overflow on token '{token}': {bytes} bytes cannot be added to {current}")]
    CounterOverflow {
        token: &'static str,
        current: i64,
        bytes: u64,
    },

    #[error(
        "free of {bytes} bytes on token '{token}' exceeds the {tracked} bytes tracked for {}",
        instance_label(.instance)
    )]
    Underflow {
        token: &'static str,
        instance: Option<InstanceId>,
        tracked: i64,
        bytes: u64,
    },

    #[error("{0}")]
    Leaked(LeakReport),
}

fn instance_label(instance: &Option<InstanceId>) -> String {
    match instance {
        Some(id) => format!("instance {id}"),
        None => "the token".to_string(),
    }
}
