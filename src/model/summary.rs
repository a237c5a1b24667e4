// Tallies for one batch run

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Outputs written successfully
    pub succeeded: usize,
    /// Outputs that failed, including every output of an unreadable source
    pub failed: usize,
    /// Outputs that were rendered at all (source read succeeded)
    pub attempted: usize,
}

impl RunSummary {
    pub fn record_success(&mut self) {
        self.attempted += 1;
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self) {
        self.attempted += 1;
        self.failed += 1;
    }

    /// Count outputs that were never attempted because their source was unreadable
    pub fn record_skipped(&mut self, outputs: usize) {
        self.failed += outputs;
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit status: 0 when nothing failed, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}
