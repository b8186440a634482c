//! Character sessions and roll logs for Grimsheet.
//!
//! Provides the append-only [`RollLog`] of dice outcomes, a thread-safe
//! [`SharedRollLog`] handle, session configuration, and the [`Session`]
//! context that ties a registry lookup, a composed character, and a roll log
//! together without any global state.

pub mod config;
pub mod error;
pub mod roll_log;
pub mod session;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use roll_log::{RollLog, RollLogEntry, SharedRollLog};
pub use session::Session;
