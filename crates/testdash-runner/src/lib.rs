//! Simulated test execution.

mod simulated;

pub use simulated::SimulatedRunner;
