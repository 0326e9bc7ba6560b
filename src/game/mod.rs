//! Game session state
//!
//! Everything the assistant needs to remember between guesses lives here; the
//! solver itself is stateless.

mod session;

pub use session::{GameStatus, MAX_ATTEMPTS, OPENERS, Session, SessionError};
