use std::cmp::Ordering;
use std::collections::HashMap;

use crate::api::SwitchSpec;
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The comparison used to order switches by name.
pub type NameOrder = fn(&str, &str) -> Ordering;

/// Compare names case-insensitively, falling back to an ordinal comparison to break ties.
///
/// ### Example
/// ```
/// # use switchyard_core::case_insensitive;
/// # use std::cmp::Ordering;
/// assert_eq!(case_insensitive("alpha", "Beta"), Ordering::Less);
/// assert_eq!(case_insensitive("B", "a"), Ordering::Greater);
/// assert_eq!(case_insensitive("a", "a"), Ordering::Equal);
/// ```
pub fn case_insensitive(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

/// An ordered collection of switch declarations, indexed by both short and long name.
///
/// The declaration order is preserved; [`SwitchRegistry::sorted_by_name`] offers a sorted view without disturbing it.
/// A switch whose name collides with an existing entry is silently ignored.
///
/// Collisions are only checked short name against short name, and long name against long name.
/// So a short name may equal another switch's long name; lookups consult short names first, which leaves that long name unreachable via [`SwitchRegistry::get`].
///
/// ### Example
/// ```
/// # use switchyard_core::{SwitchRegistry, SwitchSpec};
/// let mut switches = SwitchRegistry::new();
/// switches.add(SwitchSpec::new("v").unwrap().long("verbose"));
/// switches.add(SwitchSpec::new("q").unwrap().long("quiet"));
/// // Ignored - the name 'v' is already taken.
/// switches.add(SwitchSpec::new("v").unwrap());
///
/// assert_eq!(switches.len(), 2);
/// assert_eq!(switches.get("verbose").unwrap().name(), "v");
/// assert_eq!(switches.index_of("q"), Some(1));
///
/// // Accepted, but '--v' resolves to the short name 'v'.
/// switches.add(SwitchSpec::new("x").unwrap().long("v"));
/// assert_eq!(switches.len(), 3);
/// assert_eq!(switches.get("v").unwrap().name(), "v");
/// ```
#[derive(Clone)]
pub struct SwitchRegistry {
    switches: Vec<SwitchSpec>,
    by_name: HashMap<String, usize>,
    by_long_name: HashMap<String, usize>,
    order: NameOrder,
}

impl std::fmt::Debug for SwitchRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwitchRegistry")
            .field("switches", &self.switches)
            .finish_non_exhaustive()
    }
}

impl Default for SwitchRegistry {
    fn default() -> Self {
        Self::with_order(case_insensitive)
    }
}

impl SwitchRegistry {
    /// Create an empty registry, sorting names with [`case_insensitive`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry, sorting names with `order`.
    ///
    /// ### Example
    /// ```
    /// # use switchyard_core::{SwitchRegistry, SwitchSpec};
    /// let mut switches = SwitchRegistry::with_order(|a, b| a.cmp(b));
    /// switches.add_names(["b", "a", "B"]).unwrap();
    ///
    /// let sorted: Vec<&str> = switches.sorted_by_name().iter().map(|s| s.name()).collect();
    /// assert_eq!(sorted, vec!["B", "a", "b"]);
    /// ```
    pub fn with_order(order: NameOrder) -> Self {
        Self {
            switches: Vec::default(),
            by_name: HashMap::default(),
            by_long_name: HashMap::default(),
            order,
        }
    }

    /// Append a switch.
    /// Returns `false` (and leaves the registry untouched) if any of its names is already taken.
    pub fn add(&mut self, switch: SwitchSpec) -> bool {
        self.insert(self.switches.len(), switch)
    }

    /// Declare a bare switch for each of `names`: optional, without a long name, description, or values.
    ///
    /// Fails on the first blank name; switches declared before it remain.
    pub fn add_names<I, S>(&mut self, names: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.add(SwitchSpec::new(name)?);
        }

        Ok(())
    }

    /// Insert a switch at `index`, shifting every later switch back by one.
    /// Returns `false` (and leaves the registry untouched) if any of its names is already taken, or `index` is out of bounds.
    pub fn insert(&mut self, index: usize, switch: SwitchSpec) -> bool {
        if index > self.switches.len() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!(
                    "Ignoring switch '{}' at index {index} (length {}).",
                    switch.name(),
                    self.switches.len()
                );
            }

            return false;
        }

        if self.collides(&switch) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Ignoring switch '{}': name already declared.", switch.name());
            }

            return false;
        }

        self.by_name.insert(switch.name().to_string(), index);

        if let Some(long_name) = switch.long_name() {
            self.by_long_name.insert(long_name.to_string(), index);
        }

        self.switches.insert(index, switch);
        self.reindex(index + 1);
        true
    }

    /// Remove the switch at `index`, shifting every later switch forward by one.
    pub fn remove_at(&mut self, index: usize) -> Option<SwitchSpec> {
        if index >= self.switches.len() {
            return None;
        }

        let switch = self.switches.remove(index);
        self.by_name.remove(switch.name());

        if let Some(long_name) = switch.long_name() {
            self.by_long_name.remove(long_name);
        }

        self.reindex(index);
        Some(switch)
    }

    /// Remove the switch with the (short or long) `name`.
    pub fn remove(&mut self, name: &str) -> Option<SwitchSpec> {
        let index = self.index_of(name)?;
        self.remove_at(index)
    }

    /// Remove every switch.
    pub fn clear(&mut self) {
        self.switches.clear();
        self.by_name.clear();
        self.by_long_name.clear();
    }

    /// Whether a switch with the (short or long) `name` exists.
    /// Blank names never exist.
    pub fn contains(&self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }

        self.by_name.contains_key(name) || self.by_long_name.contains_key(name)
    }

    /// The position of the switch with the (short or long) `name`.
    /// The short name index is consulted first.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name
            .get(name)
            .or_else(|| self.by_long_name.get(name))
            .copied()
    }

    /// The switch with the (short or long) `name`.
    pub fn get(&self, name: &str) -> Option<&SwitchSpec> {
        self.index_of(name).map(|index| &self.switches[index])
    }

    /// The switches, in declaration order.
    pub fn switches(&self) -> &[SwitchSpec] {
        &self.switches
    }

    /// Iterate the switches, in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, SwitchSpec> {
        self.switches.iter()
    }

    /// The number of switches.
    pub fn len(&self) -> usize {
        self.switches.len()
    }

    /// Whether there are no switches.
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }

    /// The switches sorted by name, according to this registry's [`NameOrder`].
    /// The declaration order is not affected.
    pub fn sorted_by_name(&self) -> Vec<&SwitchSpec> {
        let mut sorted: Vec<&SwitchSpec> = self.switches.iter().collect();
        sorted.sort_by(|a, b| (self.order)(a.name(), b.name()));
        sorted
    }

    fn collides(&self, switch: &SwitchSpec) -> bool {
        self.by_name.contains_key(switch.name())
            || switch
                .long_name()
                .map(|long_name| self.by_long_name.contains_key(long_name))
                .unwrap_or(false)
    }

    // Re-home the index of every switch from `start` onwards.
    fn reindex(&mut self, start: usize) {
        for (index, switch) in self.switches.iter().enumerate().skip(start) {
            if let Some(position) = self.by_name.get_mut(switch.name()) {
                *position = index;
            }

            if let Some(long_name) = switch.long_name() {
                if let Some(position) = self.by_long_name.get_mut(long_name) {
                    *position = index;
                }
            }
        }
    }
}

impl Extend<SwitchSpec> for SwitchRegistry {
    fn extend<T: IntoIterator<Item = SwitchSpec>>(&mut self, iter: T) {
        for switch in iter {
            self.add(switch);
        }
    }
}

impl FromIterator<SwitchSpec> for SwitchRegistry {
    fn from_iter<T: IntoIterator<Item = SwitchSpec>>(iter: T) -> Self {
        let mut registry = SwitchRegistry::default();
        registry.extend(iter);
        registry
    }
}

impl<'a> IntoIterator for &'a SwitchRegistry {
    type Item = &'a SwitchSpec;
    type IntoIter = std::slice::Iter<'a, SwitchSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.switches.iter()
    }
}
