//! Unit tests for the transcript module.

mod config_tests;
mod ingest_tests;
mod labeler_tests;
