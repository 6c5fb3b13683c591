use std::io::Write;

use crate::error::Result;

pub const CONTAINER_NAME: &str = "Container 2";
pub const PROCESSING_MSG: &str = "Processing data...";
pub const STATUS_MSG: &str = "Service running successfully";

/// What one cycle prints.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleReport {
    pub timestamp: String,
    pub value: u32,
    pub mean: Option<f64>,
}

impl SampleReport {
    pub fn lines(&self) -> [String; 3] {
        let ts = &self.timestamp;
        [
            format!("[{ts}] {CONTAINER_NAME}: {PROCESSING_MSG}"),
            format!("[{ts}] Mean value: {}", format_mean(self.mean)),
            format!("[{ts}] Status: {STATUS_MSG}"),
        ]
    }

    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Float text with a trailing `.0` for whole numbers, `nan` when there is no mean.
pub fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(m) => format!("{m:?}"),
        None => "nan".to_string(),
    }
}
