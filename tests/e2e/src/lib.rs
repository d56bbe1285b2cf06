//! End-to-end test support for the studyplan engine
//!
//! The fixtures module builds realistic syllabi, histories, and feedback
//! records so journey tests read as scenarios rather than setup noise.

pub mod fixtures;
