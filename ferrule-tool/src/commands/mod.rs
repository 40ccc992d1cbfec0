//! Command modules for the ferrule CLI.
//!
//! Each subcommand is implemented in its own file.

pub mod common;

pub mod hash;
pub mod verify;
