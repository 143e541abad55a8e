/// The number of values a switch consumes from the tokens that follow it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Arity {
    /// The switch takes no values.
    #[default]
    None,
    /// Precisely `n` values; extra values in the run are dropped.
    Fixed(usize),
    /// `+`: At least one value, captured greedily up to the next switch.
    AtLeastOne,
}

impl Arity {
    /// Create a fixed arity, normalizing `0` to [`Arity::None`].
    ///
    /// ### Example
    /// ```
    /// # use switchyard_core::Arity;
    /// assert_eq!(Arity::fixed(0), Arity::None);
    /// assert_eq!(Arity::fixed(2), Arity::Fixed(2));
    /// ```
    pub fn fixed(n: usize) -> Self {
        if n == 0 {
            Arity::None
        } else {
            Arity::Fixed(n)
        }
    }

    /// Whether this arity consumes any values.
    pub fn has_arguments(&self) -> bool {
        !matches!(self.normalize(), Arity::None)
    }

    /// Whether `count` items fill this arity, meaning no more may be added.
    /// Greedy arities are never full.
    pub(crate) fn is_full(&self, count: usize) -> bool {
        match self.normalize() {
            Arity::None => true,
            Arity::Fixed(n) => count >= n,
            Arity::AtLeastOne => false,
        }
    }

    /// Whether `count` items satisfy this arity.
    pub(crate) fn is_satisfied(&self, count: usize) -> bool {
        match self.normalize() {
            Arity::None => false,
            Arity::Fixed(n) => count >= n,
            Arity::AtLeastOne => count >= 1,
        }
    }

    pub(crate) fn normalize(self) -> Self {
        match self {
            Arity::Fixed(0) => Arity::None,
            other => other,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.normalize())
    }
}
