use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the four fixed phases of a simulated print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    FetchingData,
    Printing,
    PrintingComplete,
    OrderCompleted,
}

impl Status {
    pub const SEQUENCE: [Status; 4] = [
        Status::FetchingData,
        Status::Printing,
        Status::PrintingComplete,
        Status::OrderCompleted,
    ];

    pub fn first() -> Self {
        Self::SEQUENCE[0]
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Status::FetchingData => Some(Status::Printing),
            Status::Printing => Some(Status::PrintingComplete),
            Status::PrintingComplete => Some(Status::OrderCompleted),
            Status::OrderCompleted => None,
        }
    }

    /// Text shown on the kiosk for this phase.
    pub fn label(self) -> &'static str {
        match self {
            Status::FetchingData => "Fetching Data...",
            Status::Printing => "Printing...",
            Status::PrintingComplete => "Printing Complete. Please collect your print!",
            Status::OrderCompleted => "Order Completed!",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RunId(pub u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub run: RunId,
    pub status: Status,
    pub at: DateTime<Utc>,
}

impl StatusReport {
    pub fn now(run: RunId, status: Status) -> Self {
        Self {
            run,
            status,
            at: Utc::now(),
        }
    }
}

#[cfg(test)]
#[path = "tests/status_tests.rs"]
mod tests;
