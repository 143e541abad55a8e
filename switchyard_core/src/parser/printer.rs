use terminal_size::{terminal_size, Width};

use crate::api::{SwitchRegistry, SwitchSpec};
use crate::constant::*;
use crate::matcher::SwitchSyntax;
use crate::model::Arity;
use crate::parser::interface::{chunk, flow, ColumnRenderer, ConsoleInterface, UserInterface};
use crate::parser::ConfigError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Renders the usage text for a set of declared switches.
///
/// The output consists of (each optional, and separated by a blank line):
/// * The header.
/// * The usage line, listing every switch sorted by name (optional switches in `[..]`).
/// * The descriptions of the printable switches.
/// * The footer.
///
/// ### Example
/// ```
/// # use switchyard_core::{HelpPrinter, SwitchRegistry, SwitchSpec};
/// let mut switches = SwitchRegistry::new();
/// switches.add(SwitchSpec::new("v").unwrap().long("verbose").help("Be loud."));
/// switches.add(SwitchSpec::new("o").unwrap().required().label("file"));
///
/// let printer = HelpPrinter::new("program", &switches).unwrap().width(80);
///
/// assert_eq!(
///     printer.render(),
///     vec![
///         "Usage: program -o <file> [-v]",
///         "",
///         "-v, --verbose   Be loud.",
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HelpPrinter {
    executable: String,
    header: Option<String>,
    footer: Option<String>,
    switches: Vec<SwitchSpec>,
    syntax: SwitchSyntax,
    width: usize,
}

impl HelpPrinter {
    /// Create a printer for the `switches` of the program `executable`.
    /// The output width is that of the terminal, if there is one.
    ///
    /// Fails if `executable` is blank.
    pub fn new(
        executable: impl Into<String>,
        switches: &SwitchRegistry,
    ) -> Result<Self, ConfigError> {
        let executable = executable.into();

        if executable.trim().is_empty() {
            return Err(ConfigError(
                "The executable name cannot be blank.".to_string(),
            ));
        }

        Ok(Self {
            executable,
            header: None,
            footer: None,
            switches: switches
                .sorted_by_name()
                .into_iter()
                .map(SwitchSpec::declaration)
                .collect(),
            syntax: SwitchSyntax::default(),
            width: terminal_width(),
        })
    }

    /// Document the text shown before the usage line.
    /// A blank header is not shown.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = non_blank(header.into());
        self
    }

    /// Document the text shown after the descriptions.
    /// A blank footer is not shown.
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = non_blank(footer.into());
        self
    }

    /// Set the output width, rather than using the terminal's.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Display switches with the prefixes of `syntax`, rather than `--` and `-`.
    pub fn with_syntax(mut self, syntax: SwitchSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// The lines of the help output.
    pub fn render(&self) -> Vec<String> {
        let mut sections: Vec<Vec<String>> = Vec::default();

        if let Some(header) = &self.header {
            sections.push(paragraphs(header, self.width));
        }

        if !self.switches.is_empty() {
            sections.push(self.usage());
            let descriptions = self.descriptions();

            if !descriptions.is_empty() {
                sections.push(descriptions);
            }
        }

        if let Some(footer) = &self.footer {
            sections.push(paragraphs(footer, self.width));
        }

        sections.join(&String::default())
    }

    /// Print the help output to stdout.
    pub fn print(&self) {
        self.print_to(&ConsoleInterface::default());
    }

    pub(crate) fn print_to(&self, user_interface: &(impl UserInterface + ?Sized)) {
        user_interface.print(self.render().join("\n"));
    }

    fn usage(&self) -> Vec<String> {
        let items: Vec<String> = self
            .switches
            .iter()
            .map(|switch| {
                let mut item = self.syntax.prefixed(switch.name());

                if let Some(grammar) = grammar(switch) {
                    item.push(' ');
                    item.push_str(&grammar);
                }

                if switch.is_optional() {
                    format!("[{item}]")
                } else {
                    item
                }
            })
            .collect();

        flow(
            &format!("{USAGE_PREFIX}{}", self.executable),
            USAGE_PREFIX.chars().count(),
            &items,
            self.width,
        )
    }

    fn descriptions(&self) -> Vec<String> {
        let rows: Vec<(String, &str)> = self
            .switches
            .iter()
            .filter(|switch| switch.is_printable())
            .map(|switch| {
                let mut names = self.syntax.prefixed(switch.name());

                if let Some(long_name) = switch.long_name() {
                    names.push_str(", ");
                    names.push_str(&self.syntax.long_prefixed(long_name));
                }

                if let Some(grammar) = grammar(switch) {
                    names.push(' ');
                    names.push_str(&grammar);
                }

                (names, switch.description().unwrap_or_default())
            })
            .collect();

        let left_width = match rows.iter().map(|(names, _)| names.chars().count()).max() {
            Some(width) => width,
            None => return Vec::default(),
        };
        let renderer = ColumnRenderer::guided(left_width, DESCRIPTION_PADDING, self.width);

        rows.iter()
            .flat_map(|(names, description)| renderer.render(names, description))
            .collect()
    }
}

// The value placeholders of a switch (ex: `<file>`), with `...` marking a greedy switch.
fn grammar(switch: &SwitchSpec) -> Option<String> {
    let label = |i: usize| {
        format!(
            "<{}>",
            switch
                .argument_names()
                .get(i)
                .map(String::as_str)
                .unwrap_or(DEFAULT_VALUE_NAME)
        )
    };

    match switch.arity() {
        Arity::None => None,
        Arity::Fixed(n) => Some((0..n).map(label).collect::<Vec<String>>().join(" ")),
        Arity::AtLeastOne => {
            let count = std::cmp::max(1, switch.argument_names().len());
            let labels = (0..count).map(label).collect::<Vec<String>>().join(" ");
            Some(format!("{labels} ..."))
        }
    }
}

fn paragraphs(text: &str, width: usize) -> Vec<String> {
    text.lines()
        .flat_map(|line| {
            let lines = chunk(line, width);

            if lines.is_empty() {
                vec![String::default()]
            } else {
                lines
            }
        })
        .collect()
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn terminal_width() -> usize {
    match terminal_size() {
        Some((Width(width), _)) => width as usize,
        None => {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("No terminal detected.  Selecting width: {DEFAULT_OUTPUT_WIDTH}.");
            }

            DEFAULT_OUTPUT_WIDTH
        }
    }
}
