use crate::{SpeechCapability, SpeechRequest};

/// Speech capability that logs utterances instead of playing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSpeech;

impl SpeechCapability for LogSpeech {
    fn is_available(&self) -> bool {
        true
    }

    fn submit(&mut self, request: &SpeechRequest) {
        log::info!(
            "speak [{} x{}]: {}",
            request.language(),
            request.rate(),
            request.text()
        );
    }
}
