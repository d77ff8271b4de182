//! Unit tests for the storage module.

mod cache_tests;
mod value_tests;
