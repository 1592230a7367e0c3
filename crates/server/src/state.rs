//! The single live game session shared by all request handlers.

use std::sync::Arc;

use duel_core::Session;
use tokio::sync::Mutex;

/// `None` until the first start request; replaced wholesale by every later one.
/// The lock serializes moves against the session.
pub type SessionSlot = Arc<Mutex<Option<Session>>>;

pub fn new_session_slot() -> SessionSlot {
    Arc::new(Mutex::new(None))
}
