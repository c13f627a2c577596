//! Scripted FAQ chat widget.
//!
//! A floating support panel with a canned-reply responder. Replies come
//! from an ordered keyword rule table, not a backend; the simulated typing
//! delay is the only suspension point.

pub mod responder;
pub mod timer;
pub mod widget;

pub use responder::resolve_reply;
pub use timer::{CancelHandle, PendingReply, ReplyTimer, TimerOutcome};
pub use widget::{ChatMessage, ChatWidget, Sender, SubmitOutcome};
