use crate::constant::{LONG_PREFIX, SHORT_PREFIX};
use crate::parser::ConfigError;

/// The prefixes that mark a command line token as a switch.
///
/// Defaults to `--` (long) and `-` (short).
/// The long prefix is always tried first, so it may extend the short prefix.
///
/// ### Example
/// ```
/// # use switchyard_core::SwitchSyntax;
/// let syntax = SwitchSyntax::default();
///
/// assert!(syntax.is_switch("--verbose"));
/// assert!(syntax.is_switch("-v"));
/// assert!(!syntax.is_switch("---verbose"));
/// assert!(!syntax.is_switch("verbose"));
/// assert_eq!(syntax.name("--verbose"), "verbose");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchSyntax {
    long_prefix: String,
    short_prefix: String,
}

impl Default for SwitchSyntax {
    fn default() -> Self {
        Self {
            long_prefix: LONG_PREFIX.to_string(),
            short_prefix: SHORT_PREFIX.to_string(),
        }
    }
}

impl SwitchSyntax {
    /// Create a syntax from custom prefixes.
    /// Fails if either prefix is blank.
    ///
    /// ### Example
    /// ```
    /// # use switchyard_core::SwitchSyntax;
    /// let syntax = SwitchSyntax::new("//", "/").unwrap();
    ///
    /// assert!(syntax.is_switch("/v"));
    /// assert!(!syntax.is_switch("-v"));
    /// assert!(SwitchSyntax::new("--", " ").is_err());
    /// ```
    pub fn new(
        long_prefix: impl Into<String>,
        short_prefix: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let long_prefix = long_prefix.into();
        let short_prefix = short_prefix.into();

        if long_prefix.trim().is_empty() || short_prefix.trim().is_empty() {
            return Err(ConfigError(format!(
                "Switch prefixes cannot be blank (long='{long_prefix}', short='{short_prefix}')."
            )));
        }

        Ok(Self {
            long_prefix,
            short_prefix,
        })
    }

    /// The long prefix (`--` by default).
    pub fn long_prefix(&self) -> &str {
        &self.long_prefix
    }

    /// The short prefix (`-` by default).
    pub fn short_prefix(&self) -> &str {
        &self.short_prefix
    }

    /// Strip the first matching prefix from `token`.
    /// Blank or un-prefixed tokens are returned unchanged.
    pub fn name<'t>(&self, token: &'t str) -> &'t str {
        if token.trim().is_empty() {
            return token;
        }

        token
            .strip_prefix(self.long_prefix.as_str())
            .or_else(|| token.strip_prefix(self.short_prefix.as_str()))
            .unwrap_or(token)
    }

    /// Whether `token` is a switch token: exactly one prefix followed by a name that is not itself prefixed.
    pub fn is_switch(&self, token: &str) -> bool {
        let name = self.name(token);

        if name.len() == token.len() {
            // No prefix was stripped.
            return false;
        }

        !self.has_prefix(name)
    }

    /// Render `name` with the short prefix (ex: `v` to `-v`).
    pub fn prefixed(&self, name: &str) -> String {
        self.with_prefix(name, &self.short_prefix)
    }

    /// Render `name` with the long prefix (ex: `verbose` to `--verbose`).
    pub fn long_prefixed(&self, name: &str) -> String {
        self.with_prefix(name, &self.long_prefix)
    }

    fn has_prefix(&self, value: &str) -> bool {
        self.name(value).len() != value.len()
    }

    fn with_prefix(&self, name: &str, prefix: &str) -> String {
        if name.trim().is_empty() || self.has_prefix(name) {
            name.to_string()
        } else {
            format!("{prefix}{name}")
        }
    }
}
