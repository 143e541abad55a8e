mod model;
mod syntax;

pub(crate) use model::*;
pub use syntax::SwitchSyntax;
