//! Command line behaviour of the `vidshelf` binary.

#[path = "cli/smoke_tests.rs"]
mod smoke_tests;
