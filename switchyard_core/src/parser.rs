mod base;
mod interface;
mod printer;

pub use base::*;
pub(crate) use interface::*;
pub use printer::HelpPrinter;
