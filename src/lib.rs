//! # syntest
//!
//! Authoring helpers for editor grammar "syntax test" files.
//!
//! A syntax test file alternates code lines with comment lines that assert
//! the scopes the grammar assigns to columns of the code line above them:
//!
//! ```text
//! # SYNTAX TEST "Packages/Example/Example.sublime-syntax"
//! foo.bar
//! # ^^^ variable.other.member.example
//! # <- variable.other.example
//! ```
//!
//! This crate infers what assertion to write at the cursor from the scopes
//! the host editor reports, and which columns to highlight as the assertion
//! currently in effect. The host editor itself (buffer, selection, scope
//! database, region drawing) is consumed through the traits in
//! [`syntest::host`].
//!
//! ## Testing
//!
//! [`syntest::testing::MemoryView`] is an in-memory host with fake scope maps.
//! All command-level tests drive the public surface through it.

pub mod syntest;
