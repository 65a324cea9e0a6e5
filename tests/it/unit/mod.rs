//! Unit tests for the board core.

mod settings_tests;
mod viewport_tests;
