//! Backend commands queued from UI to backend worker.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    StartProcessing,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::StartProcessing => "start_processing",
        }
    }
}
