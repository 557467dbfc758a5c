//! Convenient macros for application messaging and logging.
//!
//! This module provides a set of macros that simplify message display and
//! logging throughout the application. The macros automatically handle the
//! distinction between debug mode (with structured logging) and normal mode
//! (with simple console output), providing a unified interface for all
//! message display needs.
//!
//! ## Core Features
//!
//! - **Dual Output Mode**: Automatic switching between tracing and console output
//! - **Debug Detection**: Runtime detection of debug mode configuration
//! - **Message Categorization**: Different macros for different message types
//! - **Error Handling**: Specialized macros for error creation and propagation
//!
//! ## Debug Mode Detection
//!
//! The system automatically detects debug mode based on environment variables:
//! - **`TUSK_DEBUG`**: Explicit debug mode enablement
//! - **`RUST_LOG`**: Standard Rust logging configuration
//! - **Caching**: Debug mode detection is cached for performance
//!
//! ## Usage Examples
//!
//! ```rust
//! use tusk::{msg_info, msg_success, msg_error};
//! use tusk::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_info!(Message::TokenRefreshed, true);
//! msg_error!(Message::NotConnected);
//! ```

use std::sync::OnceLock;

/// Global cache for debug mode detection to avoid repeated environment variable checks.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching for performance.
///
/// Debug mode is considered enabled if either of these environment variables is set:
/// - **`TUSK_DEBUG`**: Application-specific debug flag
/// - **`RUST_LOG`**: Standard Rust logging configuration
///
/// The result is cached using `OnceLock`, so environment variables are checked
/// only once per application run. All message macros use this function to decide
/// whether output goes through the tracing system or plain console printing.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        // Check for application-specific debug flag
        std::env::var("TUSK_DEBUG").is_ok() ||
        // Check for standard Rust logging configuration
        std::env::var("RUST_LOG").is_ok()
    })
}

/// Prints a general message with automatic debug mode routing.
///
/// - **Debug Mode**: Uses `tracing::info!` for structured logging
/// - **Normal Mode**: Uses `println!` for simple console output
///
/// The optional `true` second argument surrounds the message with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix and automatic routing.
///
/// Intended for success confirmations and positive outcomes such as a
/// completed connect, a saved configuration, or a finished sync round.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix and automatic routing.
///
/// - **Debug Mode**: Uses `tracing::error!` for structured error logging
/// - **Normal Mode**: Uses `eprintln!` to write to stderr
///
/// Writing to stderr keeps errors separate from normal output so scripts can
/// redirect them independently.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Prints a warning message with ⚠️ prefix and automatic routing.
///
/// Warnings indicate situations requiring attention that do not prevent
/// operation from continuing, such as a failed catalog refresh that leaves
/// the cached catalog in place.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix and automatic routing.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Debug-only message display with 🔍 prefix.
///
/// - **Debug Mode**: Messages are displayed using `tracing::debug!`
/// - **Normal Mode**: Messages are completely suppressed (no output)
///
/// Useful for state transitions and low-level tracking details that would
/// clutter normal output.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
///
/// Useful for error propagation in functions that return
/// `Result<T, anyhow::Error>` and need to convert application messages into
/// proper error types.
///
/// ```rust
/// use anyhow::Result;
/// use tusk::{msg_error_anyhow, libs::messages::Message};
///
/// fn ensure_connected(connected: bool) -> Result<()> {
///     if !connected {
///         return Err(msg_error_anyhow!(Message::NotConnected));
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Early return with an error created from a message.
///
/// Equivalent to `return Err(msg_error_anyhow!(message))` but more concise.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
