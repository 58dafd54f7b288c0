//! Line-oriented picking session.
//!
//! A [`PickSession`] owns an option registry and a seeded RNG, and turns
//! short text commands (`add`, `remove`, `pick`, ...) into registry
//! mutations and weighted picks. Front ends feed it one line at a time.

pub mod config;
pub mod error;
pub mod session;

pub use config::{SelectionMode, SessionConfig};
pub use error::{SessionError, SessionResult};
pub use session::PickSession;
