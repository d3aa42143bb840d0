//! Application-level configuration.
//!
//! - [`TimingParams`]: video poll interval and status message rotation

pub mod timing_params;

pub use timing_params::TimingParams;
