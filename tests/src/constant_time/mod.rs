//! Timing analysis for operations that must not branch on secret data.
pub mod config;
pub mod tester;

pub use config::TestConfig;
pub use tester::{generate_test_insights, TimingAnalysis, TimingTester};
