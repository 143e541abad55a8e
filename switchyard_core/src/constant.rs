pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const SHORT_PREFIX: &str = "-";

// Values are addressed 1-based by callers.
pub(crate) const FIRST_VALUE: usize = 1;

pub(crate) const USAGE_PREFIX: &str = "Usage: ";
pub(crate) const DEFAULT_VALUE_NAME: &str = "value";
pub(crate) const DEFAULT_OUTPUT_WIDTH: usize = 80;
pub(crate) const DESCRIPTION_PADDING: usize = 3;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_DESCRIPTION_WIDTH: usize = 17;
