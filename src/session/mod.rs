//! Session credential handling
//!
//! The session cookie is read from a local file, or asked for once and
//! written there for later runs.

pub(crate) mod token;

pub(crate) use token::{SessionToken, load_or_prompt};
