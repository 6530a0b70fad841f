//! Line protocol for moveguard: load positions, ask about moves, print verdicts.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, SessionOption, parse_command};
pub use error::ProtoError;
pub use session::{Flow, Session, SessionConfig};
