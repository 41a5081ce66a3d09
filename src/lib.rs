//! formdeck: a reusable form + console application scaffold.
//!
//! An embedding application declares a data-entry form from an ordered
//! prompt list, gets an append-only output console, a fixed set of actions
//! (Run, Clear, Print, Open, Save, dropdown selection), blocking modal
//! input helpers and small file I/O helpers. The default binary wires the
//! stock sample application; `--app` swaps in a JSON definition.

pub mod app;
pub mod cli;
pub mod console;
pub mod demo;
pub mod fileio;
pub mod form;
pub mod harness;
pub mod input;
#[cfg(feature = "tui")]
pub mod tui;
pub mod util;
