//! Redkey command line support
//!
//! Argument parsing and the output collaborators (stdout, hex and PEM
//! files) that consume a derived [`redkey_crypto::KeyPair`].

pub mod args;
pub mod output;

pub use args::{normalize_args, Cli};
pub use output::*;
