//! Unit tests for the board module.

mod view_tests;
