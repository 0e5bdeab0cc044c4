//! Client side: the command submitter and its collaborators
//!
//! The submitter is handed explicit handles to the input field and the
//! transcript plus a transport; nothing here reaches for globals.

pub mod page;
pub mod submitter;
pub mod transport;

pub use page::{InputField, Transcript};
pub use submitter::CommandSubmitter;
pub use transport::{CommandTransport, HttpTransport};
