mod registry;
mod switch;

pub use registry::*;
pub use switch::*;
