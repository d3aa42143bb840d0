//! Timing parameters: long-running job pacing.
//!
//! [`TimingParams`] groups the intervals used by the video polling loop and
//! the progress message rotation. These are application-layer concerns, not
//! domain policy.

use std::time::Duration;

/// Pacing of the animation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingParams {
    /// Sleep between video job status checks.
    pub poll_interval: Duration,
    /// How often the "still working" message rotates while generating.
    pub status_interval: Duration,
}

impl Default for TimingParams {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(10),
            status_interval: Duration::from_secs(5),
        }
    }
}

impl TimingParams {
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_status_interval(mut self, interval: Duration) -> Self {
        self.status_interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = TimingParams::default();
        assert_eq!(params.poll_interval, Duration::from_secs(10));
        assert_eq!(params.status_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_builders() {
        let params = TimingParams::default()
            .with_poll_interval(Duration::from_millis(1))
            .with_status_interval(Duration::from_millis(2));
        assert_eq!(params.poll_interval, Duration::from_millis(1));
        assert_eq!(params.status_interval, Duration::from_millis(2));
    }
}
