//! Wire protocol: inbound interaction payloads, the typed event decoded
//! from them, and outbound reply payloads.

pub mod event;
pub mod interaction;
pub mod response;

pub use event::{decode, Event};
pub use interaction::Interaction;
pub use response::InteractionReply;

#[cfg(test)]
mod tests_decode;
