//! Core domain models for the generators
//!
//! This module defines the field records each generator consumes, the
//! collector that fills them, and the tool settings.

pub mod bluegreen;
pub mod collector;
pub mod config;
pub mod record;
pub mod simple;

pub use bluegreen::BlueGreenRecord;
pub use collector::InputCollector;
pub use record::*;
pub use simple::SimpleDeployRecord;
