//! Outbound notification channel: follow-up edits and deletions of
//! previously sent messages.

pub mod http;
pub mod messenger;
pub mod recording;

pub use http::HttpMessenger;
pub use messenger::Messenger;
pub use recording::RecordingMessenger;
