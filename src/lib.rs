//! `switchyard` is a small command line switch parser for Rust.
//!
//! Rather than converting arguments into typed fields, `switchyard` keeps to a simple contract:
//! * *Declare switches*:
//! Each switch has a short name, an optional long name, an optional description, and an arity.
//! * *Parse tokens*:
//! The parser walks the tokens once, collecting the values that follow each switch.
//! * *Query the result*:
//! Ask whether a switch appeared, and read its values by position.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/greeter.rs")]
//! ```
//!
//! ```console
//! $ greeter --name World
//! Hello, World!
//!
//! $ greeter -s
//! Required switch 'n' not found.
//! Greets someone.
//!
//! Usage: greeter [-h] -n <name> [-s]
//!
//! -h, --help          Show this help message and exit.
//! -n, --name <name>   Who to greet.
//! -s, --shout         Greet loudly.
//! ```
//!
//! # Switches
//! A switch token is any token that starts with a prefix (`--` or `-` by default) and whose remainder is not itself prefixed.
//! Switches are looked up by their short name first, then their long name.
//! So `-n` and `--name` both reach the switch declared via `SwitchSpec::new("n")?.long("name")`.
//!
//! The [`Arity`] of a switch governs how many of the following tokens it captures:
//! * [`Arity::None`]: a flag, capturing nothing.
//! * [`Arity::Fixed`]: exactly `n` values; surplus tokens up to the next switch are ignored.
//! * [`Arity::AtLeastOne`]: every token up to the next switch.
//!
//! A token which doesn't follow any switch is ignored.
//! Each switch may appear at most once, and every required switch must appear.
//! Failures are reported via [`ParseError`], whose message names the offending switch.
//!
//! # Help
//! [`HelpPrinter`] renders a header, a usage line, a table of switch descriptions, and a footer, wrapped to the terminal width.
//!
//! # Features
//! * `tracing_debug`: Emit debug logs via the `tracing` crate while declaring and parsing switches.
#![deny(missing_docs)]

pub use switchyard_core::*;
