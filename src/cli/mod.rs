//! Command-line front end for the `myco` binary.

pub mod commands;
