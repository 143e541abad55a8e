use crate::model::Arity;
use crate::parser::ParseError;

/// The declaration of a single command line switch.
///
/// A switch is identified by its (short) name, and optionally by a long name.
/// Configure the remaining aspects via the builder methods; the declaration is fixed once it is added to a [`SwitchRegistry`](./struct.SwitchRegistry.html).
///
/// ### Example
/// ```
/// # use switchyard_core::{Arity, SwitchSpec};
/// let switch = SwitchSpec::new("o")
///     .unwrap()
///     .long("output")
///     .help("Where to write the result.")
///     .required()
///     .label("file");
///
/// assert_eq!(switch.name(), "o");
/// assert_eq!(switch.long_name(), Some("output"));
/// assert_eq!(switch.arity(), Arity::Fixed(1));
/// assert!(switch.is_printable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchSpec {
    name: String,
    long_name: Option<String>,
    description: Option<String>,
    required: bool,
    arity: Arity,
    argument_names: Vec<String>,
    values: Vec<String>,
}

impl SwitchSpec {
    /// Declare a switch with the (short) `name`.
    /// The switch starts out optional, without a long name, description, or values.
    ///
    /// Fails with [`ParseError::InvalidDeclaration`] if `name` is blank.
    ///
    /// ### Example
    /// ```
    /// # use switchyard_core::{ParseError, SwitchSpec};
    /// assert!(SwitchSpec::new("v").is_ok());
    /// assert_eq!(
    ///     SwitchSpec::new("  ").unwrap_err(),
    ///     ParseError::InvalidDeclaration("  ".to_string())
    /// );
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, ParseError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ParseError::InvalidDeclaration(name));
        }

        Ok(Self {
            name,
            long_name: None,
            description: None,
            required: false,
            arity: Arity::None,
            argument_names: Vec::default(),
            values: Vec::default(),
        })
    }

    /// Document the long name of this switch.
    /// A long name that is blank or equal to the short name is ignored.
    pub fn long(mut self, long_name: impl Into<String>) -> Self {
        let long_name = long_name.into();

        if long_name.trim().is_empty() || long_name == self.name {
            self.long_name = None;
        } else {
            self.long_name = Some(long_name);
        }

        self
    }

    /// Document the help message of this switch.
    /// If repeated, only the final message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        let description = description.into();

        if description.trim().is_empty() {
            self.description = None;
        } else {
            self.description = Some(description);
        }

        self
    }

    /// Mark this switch as required; parsing fails when it is absent.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the number of values this switch consumes.
    /// `Arity::Fixed(0)` is normalized to `Arity::None`.
    /// Argument names beyond a fixed arity are discarded.
    pub fn takes(mut self, arity: Arity) -> Self {
        self.arity = arity.normalize();

        match self.arity {
            Arity::None => self.argument_names.clear(),
            Arity::Fixed(n) => self.argument_names.truncate(n),
            Arity::AtLeastOne => {}
        };

        self
    }

    /// Name the next value of this switch, for display in the usage text (ex: `<file>`).
    ///
    /// A switch without values is promoted to `Arity::Fixed(1)`.
    /// Blank names, or names beyond a fixed arity, are ignored.
    ///
    /// ### Example
    /// ```
    /// # use switchyard_core::{Arity, SwitchSpec};
    /// let switch = SwitchSpec::new("r")
    ///     .unwrap()
    ///     .takes(Arity::Fixed(2))
    ///     .label("width")
    ///     .label("height")
    ///     .label("depth");
    ///
    /// assert_eq!(switch.argument_names(), &["width", "height"]);
    /// ```
    pub fn label(mut self, argument_name: impl Into<String>) -> Self {
        let argument_name = argument_name.into();

        if argument_name.trim().is_empty() {
            return self;
        }

        if self.arity == Arity::None {
            self.arity = Arity::Fixed(1);
        }

        if !self.has_all_names() {
            self.argument_names.push(argument_name);
        }

        self
    }

    /// Name all the values of this switch at once, for display in the usage text.
    ///
    /// Unless the switch is greedy (`Arity::AtLeastOne`), its arity becomes `Arity::Fixed` with one value per non-blank name.
    ///
    /// ### Example
    /// ```
    /// # use switchyard_core::{Arity, SwitchSpec};
    /// let switch = SwitchSpec::new("r").unwrap().labels(["width", "", "height"]);
    ///
    /// assert_eq!(switch.arity(), Arity::Fixed(2));
    /// assert_eq!(switch.argument_names(), &["width", "height"]);
    /// ```
    pub fn labels<I, S>(mut self, argument_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = argument_names
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| !name.trim().is_empty());
        self.argument_names.extend(names);

        if self.arity != Arity::AtLeastOne {
            self.arity = Arity::fixed(self.argument_names.len());
        }

        self
    }

    /// The (short) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The long name, if any.
    pub fn long_name(&self) -> Option<&str> {
        self.long_name.as_deref()
    }

    /// The help message, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The number of values this switch consumes.
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// The names of the values, for display.
    pub fn argument_names(&self) -> &[String] {
        &self.argument_names
    }

    /// The values captured during parsing.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Whether the switch must appear on the command line.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the switch may be omitted from the command line.
    pub fn is_optional(&self) -> bool {
        !self.required
    }

    /// Whether the switch consumes values.
    pub fn has_arguments(&self) -> bool {
        self.arity.has_arguments()
    }

    /// Whether the switch has a long name.
    pub fn has_long_name(&self) -> bool {
        self.long_name.is_some()
    }

    /// Whether the switch has a help message.
    pub fn has_description(&self) -> bool {
        self.description.is_some()
    }

    /// Whether the switch is shown in the usage descriptions.
    /// A switch with neither a long name nor a description is usable only programmatically.
    pub fn is_printable(&self) -> bool {
        self.has_long_name() || self.has_description()
    }

    /// Whether every value of a fixed arity has been named.
    pub fn has_all_names(&self) -> bool {
        matches!(self.arity, Arity::Fixed(_)) && self.arity.is_full(self.argument_names.len())
    }

    /// Whether enough values have been named to satisfy the arity.
    pub fn has_enough_names(&self) -> bool {
        self.arity.is_satisfied(self.argument_names.len())
    }

    /// Whether every value of a fixed arity has been captured.
    pub fn has_all_values(&self) -> bool {
        matches!(self.arity, Arity::Fixed(_)) && self.arity.is_full(self.values.len())
    }

    /// Whether enough values have been captured to satisfy the arity.
    pub fn has_enough_values(&self) -> bool {
        self.arity.is_satisfied(self.values.len())
    }

    /// Capture a value, returning whether it was kept.
    /// Nothing is kept by a switch without arguments, or one whose fixed arity is already filled.
    pub(crate) fn add_value(&mut self, value: impl Into<String>) -> bool {
        if !self.has_arguments() || self.has_all_values() {
            return false;
        }

        self.values.push(value.into());
        true
    }

    /// A copy of this declaration, without any captured values.
    pub(crate) fn declaration(&self) -> Self {
        Self {
            values: Vec::default(),
            ..self.clone()
        }
    }
}
