use std::env;
use thiserror::Error;

use crate::api::SwitchRegistry;
use crate::constant::FIRST_VALUE;
use crate::matcher::{CloseError, SwitchSyntax, ValueRun};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The reasons a declaration or parse may fail.
/// Each carries the name of the offending switch.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A switch was declared with a blank name.
    #[error("Invalid switch name '{0}'.")]
    InvalidDeclaration(String),

    /// A switch token names no declared switch.
    #[error("Switch '{0}' undefined.")]
    UndefinedSwitch(String),

    /// A switch appeared more than once.
    #[error("Switch '{0}' already parsed.")]
    SwitchAlreadyParsed(String),

    /// A switch did not receive enough values before the next switch or the end of input.
    #[error("Missing argument for switch '{0}'.")]
    SwitchMissingArgument(String),

    /// A required switch never appeared.
    #[error("Required switch '{0}' not found.")]
    RequiredSwitchMissing(String),
}

impl ParseError {
    /// The name of the offending switch.
    pub fn name(&self) -> &str {
        match self {
            ParseError::InvalidDeclaration(name)
            | ParseError::UndefinedSwitch(name)
            | ParseError::SwitchAlreadyParsed(name)
            | ParseError::SwitchMissingArgument(name)
            | ParseError::RequiredSwitchMissing(name) => name,
        }
    }
}

impl From<CloseError> for ParseError {
    fn from(error: CloseError) -> Self {
        match error {
            CloseError::TooFewValues { name, .. } => ParseError::SwitchMissingArgument(name),
        }
    }
}

/// A misconfiguration of the switch syntax or help printer.
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// Parses command line tokens against a contract of declared switches.
///
/// ### Example
/// ```
/// # use switchyard_core::{Arity, ArgumentParser, SwitchRegistry, SwitchSpec};
/// let mut switches = SwitchRegistry::new();
/// switches.add(SwitchSpec::new("v").unwrap().long("verbose"));
/// switches.add(SwitchSpec::new("o").unwrap().long("output").required().label("file"));
///
/// let mut parser = ArgumentParser::new(&["--output", "out.txt", "-v"], switches);
/// parser.parse().unwrap();
///
/// assert!(parser.all_parsed(&["v", "o"]));
/// assert_eq!(parser.get_value("output"), Some("out.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct ArgumentParser {
    tokens: Vec<String>,
    switches: SwitchRegistry,
    parsed: SwitchRegistry,
    syntax: SwitchSyntax,
}

impl ArgumentParser {
    /// Create a parser for `tokens` (excluding the program name), against the declared `switches`.
    pub fn new<S: AsRef<str>>(tokens: &[S], switches: SwitchRegistry) -> Self {
        Self {
            tokens: tokens.iter().map(|t| t.as_ref().to_string()).collect(),
            switches,
            parsed: SwitchRegistry::default(),
            syntax: SwitchSyntax::default(),
        }
    }

    /// Create a parser for the Cli [`env::args`] (skipping the program name), against the declared `switches`.
    pub fn from_env(switches: SwitchRegistry) -> Self {
        let tokens: Vec<String> = env::args().skip(1).collect();
        Self::new(&tokens, switches)
    }

    /// Recognize switch tokens by the prefixes of `syntax`, rather than `--` and `-`.
    pub fn with_syntax(mut self, syntax: SwitchSyntax) -> Self {
        self.syntax = syntax;
        self
    }

    /// Run the parser over the tokens.
    ///
    /// Tokens are scanned front to back:
    /// 1. A switch token must name a declared switch, which must not have been parsed already.
    /// 2. A switch with arguments consumes the following value tokens, up to the next switch token or the end of input.
    /// Values beyond a fixed arity are dropped; too few values is an error.
    /// 3. Any other token is ignored.
    ///
    /// Once the tokens are exhausted, every required switch must have been parsed.
    ///
    /// The first violation is returned.
    /// Switches parsed before the violation remain queryable (ex: to detect a help switch).
    /// Parsing again starts over from scratch.
    pub fn parse(&mut self) -> Result<(), ParseError> {
        self.parsed.clear();
        self.scan()
    }

    fn scan(&mut self) -> Result<(), ParseError> {
        let mut index = 0;

        while index < self.tokens.len() {
            let token = &self.tokens[index];
            index += 1;

            if !self.syntax.is_switch(token) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Ignoring stray token '{token}'.");
                }

                continue;
            }

            let name = self.syntax.name(token);
            let declared = self
                .switches
                .get(name)
                .ok_or_else(|| ParseError::UndefinedSwitch(name.to_string()))?;

            if self.parsed.contains(name) {
                return Err(ParseError::SwitchAlreadyParsed(name.to_string()));
            }

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Matched '{token}' to switch '{}'.", declared.name());
            }

            let mut value_run = ValueRun::open(name, declared.declaration());

            if value_run.accepts_values() {
                // Values run until the next switch token, which is then processed as its own switch.
                while index < self.tokens.len() && !self.syntax.is_switch(&self.tokens[index]) {
                    value_run.push(&self.tokens[index]);
                    index += 1;
                }
            }

            self.parsed.add(value_run.close()?);
        }

        for switch in &self.switches {
            if switch.is_required() && !self.parsed.contains(switch.name()) {
                return Err(ParseError::RequiredSwitchMissing(switch.name().to_string()));
            }
        }

        Ok(())
    }

    /// Whether the switch with the (short or long) `name` was parsed.
    pub fn is_parsed(&self, name: &str) -> bool {
        self.parsed.contains(name)
    }

    /// Whether every one of `names` was parsed.
    /// An empty `names` is never parsed.
    pub fn all_parsed(&self, names: &[&str]) -> bool {
        !names.is_empty() && names.iter().all(|name| self.is_parsed(name))
    }

    /// Whether at least one of `names` was parsed.
    /// An empty `names` is never parsed.
    pub fn any_parsed(&self, names: &[&str]) -> bool {
        !names.is_empty() && !self.none_parsed(names)
    }

    /// Whether none of `names` were parsed.
    /// An empty `names` is a non-match, so this returns `false`.
    pub fn none_parsed(&self, names: &[&str]) -> bool {
        !names.is_empty() && !names.iter().any(|name| self.is_parsed(name))
    }

    /// The first value of the parsed switch `name`.
    pub fn get_value(&self, name: &str) -> Option<&str> {
        self.get_value_at(name, FIRST_VALUE)
    }

    /// The `number`th (1-based) value of the parsed switch `name`.
    ///
    /// ### Example
    /// ```
    /// # use switchyard_core::{Arity, ArgumentParser, SwitchRegistry, SwitchSpec};
    /// let switches: SwitchRegistry = [SwitchSpec::new("x").unwrap().takes(Arity::Fixed(2))]
    ///     .into_iter()
    ///     .collect();
    /// let mut parser = ArgumentParser::new(&["-x", "1", "2"], switches);
    /// parser.parse().unwrap();
    ///
    /// assert_eq!(parser.get_value_at("x", 0), None);
    /// assert_eq!(parser.get_value_at("x", 2), Some("2"));
    /// assert_eq!(parser.get_value_at("x", 3), None);
    /// ```
    pub fn get_value_at(&self, name: &str, number: usize) -> Option<&str> {
        let values = self.get_values(name)?;

        if number < FIRST_VALUE {
            return None;
        }

        values.get(number - FIRST_VALUE).map(String::as_str)
    }

    /// All the values of the parsed switch `name`.
    pub fn get_values(&self, name: &str) -> Option<&[String]> {
        self.parsed.get(name).map(|switch| switch.values())
    }

    /// The number of distinct switches parsed.
    pub fn number_switches_parsed(&self) -> usize {
        self.parsed.len()
    }

    /// The parsed switches, in the order they appeared.
    pub fn parsed(&self) -> &SwitchRegistry {
        &self.parsed
    }

    /// The declared switches.
    pub fn switches(&self) -> &SwitchRegistry {
        &self.switches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SwitchSpec;
    use crate::model::Arity;
    use rstest::rstest;

    fn declare(switches: Vec<SwitchSpec>) -> SwitchRegistry {
        switches.into_iter().collect()
    }

    fn bare(name: &str) -> SwitchSpec {
        SwitchSpec::new(name).unwrap()
    }

    fn parse(tokens: &[&str], switches: Vec<SwitchSpec>) -> (ArgumentParser, Result<(), ParseError>) {
        let mut parser = ArgumentParser::new(tokens, declare(switches));
        let result = parser.parse();
        (parser, result)
    }

    #[test]
    fn parse_empty() {
        let mut parser = ArgumentParser::new(&[] as &[&str], SwitchRegistry::new());
        parser.parse().unwrap();
        assert_eq!(parser.number_switches_parsed(), 0);
        assert!(!parser.is_parsed("a"));
    }

    #[test]
    fn parse_switches() {
        let (parser, result) = parse(&["-a", "-b"], vec![bare("a"), bare("b").required()]);
        result.unwrap();
        assert!(parser.is_parsed("a"));
        assert!(parser.is_parsed("b"));
        assert_eq!(parser.number_switches_parsed(), 2);
    }

    #[rstest]
    #[case(vec!["--verbose"])]
    #[case(vec!["-v"])]
    fn parse_either_name(#[case] tokens: Vec<&str>) {
        let (parser, result) = parse(&tokens, vec![bare("v").long("verbose")]);
        result.unwrap();
        assert!(parser.is_parsed("v"));
        assert!(parser.is_parsed("verbose"));
    }

    #[test]
    fn parse_missing_argument() {
        let (parser, result) = parse(&["-n"], vec![bare("n").required().takes(Arity::Fixed(1))]);
        assert_eq!(result, Err(ParseError::SwitchMissingArgument("n".to_string())));
        assert_eq!(parser.number_switches_parsed(), 0);
    }

    #[rstest]
    #[case(vec!["-x", "v1", "v2", "v3"], vec!["v1", "v2"])]
    #[case(vec!["-x", "v1", "v2"], vec!["v1", "v2"])]
    #[case(vec!["-x", "v1", "v2", "v3", "-y"], vec!["v1", "v2"])]
    fn parse_fixed(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        let (parser, result) = parse(&tokens, vec![bare("x").takes(Arity::Fixed(2)), bare("y")]);
        result.unwrap();
        assert_eq!(parser.get_values("x").unwrap(), expected.as_slice());
    }

    #[rstest]
    #[case(vec!["-x"])]
    #[case(vec!["-x", "v1"])]
    #[case(vec!["-x", "v1", "-y", "v2"])]
    fn parse_fixed_too_few(#[case] tokens: Vec<&str>) {
        let (_, result) = parse(&tokens, vec![bare("x").takes(Arity::Fixed(2)), bare("y")]);
        assert_eq!(result, Err(ParseError::SwitchMissingArgument("x".to_string())));
    }

    #[rstest]
    #[case(vec!["-g", "a"], vec!["a"])]
    #[case(vec!["-g", "a", "b", "c"], vec!["a", "b", "c"])]
    #[case(vec!["-g", "a", "b", "-y", "c"], vec!["a", "b"])]
    #[case(vec!["-y", "-g", " ", "---"], vec![" ", "---"])]
    fn parse_greedy(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        let (parser, result) = parse(&tokens, vec![bare("g").takes(Arity::AtLeastOne), bare("y")]);
        result.unwrap();
        assert_eq!(parser.get_values("g").unwrap(), expected.as_slice());
    }

    #[rstest]
    #[case(vec!["-g"])]
    #[case(vec!["-g", "-y", "a"])]
    fn parse_greedy_none(#[case] tokens: Vec<&str>) {
        let (_, result) = parse(&tokens, vec![bare("g").takes(Arity::AtLeastOne), bare("y")]);
        assert_eq!(result, Err(ParseError::SwitchMissingArgument("g".to_string())));
    }

    #[test]
    fn parse_undefined() {
        let (parser, result) = parse(&["-a", "-c"], vec![bare("a"), bare("b")]);
        assert_matches!(result, Err(ParseError::UndefinedSwitch(name)) if name == "c");
        assert!(parser.is_parsed("a"));
        assert_eq!(parser.number_switches_parsed(), 1);
    }

    #[test]
    fn parse_failure_keeps_earlier_switches() {
        let (parser, result) = parse(
            &["-h"],
            vec![bare("n").required().takes(Arity::Fixed(1)), bare("h").long("help")],
        );
        assert_eq!(result, Err(ParseError::RequiredSwitchMissing("n".to_string())));
        assert!(parser.is_parsed("help"));
        assert!(!parser.is_parsed("n"));

        let (parser, result) = parse(
            &["-h", "-n"],
            vec![bare("n").takes(Arity::Fixed(1)), bare("h")],
        );
        assert_eq!(result, Err(ParseError::SwitchMissingArgument("n".to_string())));
        assert!(parser.is_parsed("h"));
        assert!(!parser.is_parsed("n"));
    }

    #[test]
    fn parse_again_after_failure() {
        let mut parser = ArgumentParser::new(
            &["-a", "-c"],
            declare(vec![bare("a"), bare("b")]),
        );

        assert!(parser.parse().is_err());
        assert!(parser.parse().is_err());
        assert_eq!(parser.number_switches_parsed(), 1);
    }

    #[rstest]
    #[case(vec!["-a", "-a"], "a")]
    #[case(vec!["-a", "--alpha"], "alpha")]
    #[case(vec!["--alpha", "-b", "-a"], "a")]
    fn parse_already_parsed(#[case] tokens: Vec<&str>, #[case] name: &str) {
        let (_, result) = parse(&tokens, vec![bare("a").long("alpha"), bare("b")]);
        assert_eq!(result, Err(ParseError::SwitchAlreadyParsed(name.to_string())));
    }

    #[test]
    fn parse_required_missing() {
        let (_, result) = parse(&[], vec![bare("a").required()]);
        assert_matches!(result, Err(ParseError::RequiredSwitchMissing(name)) if name == "a");
    }

    #[test]
    fn parse_required_missing_declaration_order() {
        let (_, result) = parse(&["-c"], vec![bare("b").required(), bare("a").required(), bare("c")]);
        assert_eq!(result, Err(ParseError::RequiredSwitchMissing("b".to_string())));
    }

    #[test]
    fn parse_scan_before_required() {
        // Scan errors are reported before the required sweep.
        let (_, result) = parse(&["-z"], vec![bare("a").required()]);
        assert_eq!(result, Err(ParseError::UndefinedSwitch("z".to_string())));
    }

    #[rstest]
    #[case(vec!["stray", "-a"])]
    #[case(vec!["-a", "stray", "more"])]
    #[case(vec!["---a", "-a"])]
    fn parse_ignores_stray(#[case] tokens: Vec<&str>) {
        let (parser, result) = parse(&tokens, vec![bare("a")]);
        result.unwrap();
        assert!(parser.is_parsed("a"));
        assert_eq!(parser.number_switches_parsed(), 1);
        let no_values: &[String] = &[];
        assert_eq!(parser.get_values("a").unwrap(), no_values);
    }

    #[rstest]
    #[case("-")]
    #[case("--")]
    fn parse_bare_prefix(#[case] token: &str) {
        let (_, result) = parse(&[token], vec![bare("a")]);
        assert_eq!(result, Err(ParseError::UndefinedSwitch("".to_string())));
    }

    #[test]
    fn parse_twice() {
        let mut parser = ArgumentParser::new(
            &["-g", "a", "b", "-f", "c", "d"],
            declare(vec![
                bare("g").takes(Arity::AtLeastOne),
                bare("f").takes(Arity::Fixed(1)),
                bare("n"),
            ]),
        );

        parser.parse().unwrap();
        let first = (parser.get_values("g").map(|v| v.to_vec()), parser.get_values("f").map(|v| v.to_vec()));
        parser.parse().unwrap();
        let second = (parser.get_values("g").map(|v| v.to_vec()), parser.get_values("f").map(|v| v.to_vec()));

        assert_eq!(first, second);
        assert_eq!(parser.get_values("g").unwrap(), &["a", "b"]);
        assert_eq!(parser.get_values("f").unwrap(), &["c"]);
        assert!(!parser.is_parsed("n"));
        assert_eq!(parser.number_switches_parsed(), 2);
        // The contract never captures values.
        assert!(parser.switches().get("g").unwrap().values().is_empty());
    }

    #[test]
    fn parse_custom_syntax() {
        let mut parser = ArgumentParser::new(
            &["/v", "-x", "//out", "file"],
            declare(vec![bare("v"), bare("out").label("path")]),
        )
        .with_syntax(SwitchSyntax::new("//", "/").unwrap());

        parser.parse().unwrap();
        assert!(parser.is_parsed("v"));
        assert_eq!(parser.get_value("out"), Some("file"));
    }

    #[test]
    fn parsed_in_token_order() {
        let (parser, result) = parse(&["-c", "-a"], vec![bare("a"), bare("b"), bare("c")]);
        result.unwrap();
        let names: Vec<&str> = parser.parsed().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["c", "a"]);
    }

    #[rstest]
    #[case(vec![], false, false, true)]
    #[case(vec!["-a"], false, true, false)]
    #[case(vec!["-a", "-b"], true, true, false)]
    fn queries(
        #[case] tokens: Vec<&str>,
        #[case] all: bool,
        #[case] any: bool,
        #[case] none: bool,
    ) {
        let (parser, result) = parse(&tokens, vec![bare("a"), bare("b"), bare("c")]);
        result.unwrap();
        assert_eq!(parser.all_parsed(&["a", "b"]), all);
        assert_eq!(parser.any_parsed(&["a", "b"]), any);
        assert_eq!(parser.none_parsed(&["a", "b"]), none);
        assert!(!parser.all_parsed(&["c"]));
        assert!(parser.none_parsed(&["c", "undeclared"]));
    }

    #[test]
    fn queries_empty_names() {
        let (parser, result) = parse(&["-a"], vec![bare("a")]);
        result.unwrap();
        assert!(!parser.all_parsed(&[]));
        assert!(!parser.any_parsed(&[]));
        assert!(!parser.none_parsed(&[]));
    }

    #[test]
    fn get_value() {
        let (parser, result) = parse(
            &["-a", "1", "-b", "2", "3"],
            vec![bare("a").label("x").required(), bare("b").labels(["y", "z"]), bare("c")],
        );
        result.unwrap();
        assert_eq!(parser.get_value("a"), Some("1"));
        assert_eq!(parser.get_value("b"), Some("2"));
        assert_eq!(parser.get_value_at("b", 2), Some("3"));
        assert_eq!(parser.get_value_at("b", 3), None);
        assert_eq!(parser.get_value_at("b", 0), None);
        assert_eq!(parser.get_value("c"), None);
        assert_eq!(parser.get_value(""), None);
        assert_eq!(parser.get_values("c"), None);
        assert_eq!(parser.get_values("undeclared"), None);
    }

    #[test]
    fn get_value_no_arguments() {
        let (parser, result) = parse(&["-a", "stray"], vec![bare("a")]);
        result.unwrap();
        assert_eq!(parser.get_value("a"), None);
        assert_eq!(parser.get_values("a").map(|v| v.len()), Some(0));
    }

    #[test]
    fn error_name() {
        assert_eq!(ParseError::UndefinedSwitch("c".to_string()).name(), "c");
        assert_eq!(
            ParseError::RequiredSwitchMissing("a".to_string()).to_string(),
            "Required switch 'a' not found."
        );
        assert_eq!(
            ParseError::SwitchMissingArgument("n".to_string()).to_string(),
            "Missing argument for switch 'n'."
        );
    }
}
