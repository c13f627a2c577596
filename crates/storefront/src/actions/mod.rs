//! Declarative page actions.
//!
//! Interactive elements carry marker attributes in the page markup. At bind
//! time each element's markers are parsed once into a typed [`Command`];
//! activating the element later sends that command through the
//! [`ActionDispatcher`], which returns the side effects for the host page
//! to apply. Elements whose markers change after binding are not re-scanned.

pub mod command;
pub mod dispatch;
pub mod markers;

pub use command::{Command, QtyAdjustment};
pub use dispatch::{ActionDispatcher, DispatchContext, Effect};
pub use markers::ElementMarkers;
