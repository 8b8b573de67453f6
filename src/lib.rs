//! IFTTT webhook client.
//!
//! A library for triggering IFTTT Maker Webhooks events, with shortcuts
//! for the Gmail and mobile notification applets.

pub mod config;
pub mod webhook;
