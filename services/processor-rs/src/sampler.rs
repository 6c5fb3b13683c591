use rand::Rng;
use std::io::Write;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::clock::Clock;
use crate::error::Result;
use crate::report::SampleReport;
use crate::sample::{SampleFrame, SampleRecord};

/// Pause between the end of one report and the start of the next cycle.
pub const INTERVAL: Duration = Duration::from_secs(7);

/// Generates one sample per cycle and reports it to `out`.
pub struct Sampler<C, R, W> {
    clock: C,
    rng: R,
    out: W,
}

impl<C: Clock, R: Rng, W: Write> Sampler<C, R, W> {
    pub fn new(clock: C, rng: R, out: W) -> Self {
        Self { clock, rng, out }
    }

    /// Generate, aggregate and print. Does not pause.
    pub fn cycle(&mut self) -> Result<SampleReport> {
        let record = SampleRecord::generate(self.clock.timestamp(), &mut self.rng);
        debug!(?record, "sample generated");

        let value = record.value;
        let frame = SampleFrame::from(record);
        let report = SampleReport {
            timestamp: self.clock.timestamp(),
            value,
            mean: frame.mean_value(),
        };
        report.write_to(&mut self.out)?;
        Ok(report)
    }

    /// Runs cycles until `token` is cancelled and returns how many completed.
    pub async fn run(&mut self, token: CancellationToken) -> Result<u64> {
        let mut cycles = 0u64;

        while !token.is_cancelled() {
            let report = self.cycle()?;
            cycles += 1;
            debug!(cycle = cycles, value = report.value, "cycle reported");

            tokio::select! {
                _ = token.cancelled() => break,
                _ = sleep(INTERVAL) => {}
            }
        }

        info!(cycles, "sampler stopped");
        Ok(cycles)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }
}
