//! Core module for `switchyard`.
//! See the `switchyard` crate root for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use matcher::SwitchSyntax;
pub use model::*;
pub use parser::{ArgumentParser, ConfigError, HelpPrinter, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
