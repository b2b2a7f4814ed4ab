//! Speech capabilities.
//!
//! Concrete [`SpeechCapability`](crate::SpeechCapability) implementations.
//! Browser or OS synthesizers live with the integrator; these cover
//! logging and tests.
//!
//! # Available Backends
//!
//! - [`LogSpeech`] - writes each utterance to the `log` facade
//! - [`RecordingSpeech`] - keeps submitted requests in memory

pub mod logger;
pub mod recording;

pub use logger::LogSpeech;
pub use recording::RecordingSpeech;
