mod auth;
pub mod client;
mod questionnaire;
mod resignations;
pub mod session;
pub mod types;

pub use client::*;
pub use session::{BrowserSessionStore, MemorySessionStore, SessionStore};
pub use types::*;
