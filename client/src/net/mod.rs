//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat` posts visitor messages to the assistant endpoint and defines its
//! wire schema.

pub mod chat;
