use precis_core::inference::SummarizerClient;

#[derive(Clone)]
pub struct ServerState {
    summarizer: SummarizerClient,
}

impl From<SummarizerClient> for ServerState {
    fn from(summarizer: SummarizerClient) -> Self {
        Self { summarizer }
    }
}

impl ServerState {
    pub fn summarizer(&self) -> &SummarizerClient {
        &self.summarizer
    }

    pub fn min_text_length(&self) -> usize {
        self.summarizer.config().min_text_length
    }
}
