//! Adapter for the external cflow call-flow analyzer.

pub mod runner;

pub use runner::CflowRunner;
