use crate::{SpeechCapability, SpeechRequest};

/// Speech capability that records requests in submission order.
#[derive(Debug, Clone)]
pub struct RecordingSpeech {
    available: bool,
    requests: Vec<SpeechRequest>,
}

impl Default for RecordingSpeech {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSpeech {
    pub fn new() -> Self {
        Self {
            available: true,
            requests: Vec::new(),
        }
    }

    /// A capability that reports itself unavailable, like a browser without
    /// speech synthesis.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            requests: Vec::new(),
        }
    }

    pub fn requests(&self) -> &[SpeechRequest] {
        &self.requests
    }

    /// Texts of all recorded requests.
    pub fn spoken(&self) -> Vec<&str> {
        self.requests.iter().map(SpeechRequest::text).collect()
    }

    pub fn take(&mut self) -> Vec<SpeechRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl SpeechCapability for RecordingSpeech {
    fn is_available(&self) -> bool {
        self.available
    }

    fn submit(&mut self, request: &SpeechRequest) {
        self.requests.push(request.clone());
    }
}
