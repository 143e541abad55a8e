//! Types which, typically, may be imported without concern: `use switchyard::prelude::*`.

pub use crate::api::{SwitchRegistry, SwitchSpec};
pub use crate::model::Arity;
pub use crate::parser::{ArgumentParser, ParseError};
