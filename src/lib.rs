//! journ - Terminal journal with private, per-user entries
//!
//! A command-line journaling application where users register with a
//! username and password and manage their own text entries (add, list,
//! search, delete). Accounts and entries persist as whole-file JSON
//! stores under a `.journ` directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JournError;
