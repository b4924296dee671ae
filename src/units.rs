// 📏 Units of Measure
// Chosen once per run: command-line argument first, interactive prompt otherwise

use anyhow::{bail, Context, Result};
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub const PROMPT: &str = "Choose unit of measure (cm or in): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Centimeters,
    Inches,
}

impl Unit {
    /// Two-letter code printed after every value
    pub fn code(&self) -> &'static str {
        match self {
            Unit::Centimeters => "cm",
            Unit::Inches => "in",
        }
    }

    /// Parse user text: only the first two characters count, case-insensitive.
    /// "CM", "cms" and "inches" are all accepted; leading whitespace is not.
    pub fn parse_prefix(text: &str) -> Option<Unit> {
        let prefix: String = text.chars().take(2).collect();
        match prefix.to_lowercase().as_str() {
            "cm" => Some(Unit::Centimeters),
            "in" => Some(Unit::Inches),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Unit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Unit::parse_prefix(s).with_context(|| format!("Unknown unit of measure: {:?}", s))
    }
}

/// Resolve the unit from an optional argument, prompting until valid.
///
/// Invalid text only re-prompts. Running out of input is an error, since the
/// loop could never finish.
pub fn resolve_unit<R: BufRead, W: Write>(
    arg: Option<&str>,
    mut input: R,
    mut output: W,
) -> Result<Unit> {
    if let Some(unit) = arg.and_then(Unit::parse_prefix) {
        return Ok(unit);
    }

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read unit of measure")?;
        if read == 0 {
            bail!("No unit of measure given (expected cm or in)");
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        match Unit::parse_prefix(answer) {
            Some(unit) => return Ok(unit),
            None => tracing::debug!(input = answer, "rejected unit of measure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_prefix() {
        assert_eq!(Unit::parse_prefix("cm"), Some(Unit::Centimeters));
        assert_eq!(Unit::parse_prefix("IN"), Some(Unit::Inches));
        assert_eq!(Unit::parse_prefix("inches"), Some(Unit::Inches));
        assert_eq!(Unit::parse_prefix("Cms\n"), Some(Unit::Centimeters));
        assert_eq!(Unit::parse_prefix(" cm"), None);
        assert_eq!(Unit::parse_prefix("\tin"), None);
        assert_eq!(Unit::parse_prefix("mm"), None);
        assert_eq!(Unit::parse_prefix("c"), None);
        assert_eq!(Unit::parse_prefix(""), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("in".parse::<Unit>().unwrap(), Unit::Inches);
        assert!("feet".parse::<Unit>().is_err());
    }

    #[test]
    fn test_argument_skips_prompt() {
        let mut output = Vec::new();
        let unit = resolve_unit(Some("CM"), Cursor::new(""), &mut output).unwrap();

        assert_eq!(unit, Unit::Centimeters);
        assert!(output.is_empty());
    }

    #[test]
    fn test_prompt_repeats_until_valid() {
        let mut output = Vec::new();
        let input = Cursor::new("meters\nft\n\nInch\n");
        let unit = resolve_unit(Some("yards"), input, &mut output).unwrap();

        assert_eq!(unit, Unit::Inches);
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT.repeat(4));
    }

    #[test]
    fn test_leading_whitespace_is_rejected() {
        let mut output = Vec::new();
        let input = Cursor::new(" in\r\ncm\r\n");
        let unit = resolve_unit(Some(" cm"), input, &mut output).unwrap();

        assert_eq!(unit, Unit::Centimeters);
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT.repeat(2));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut output = Vec::new();
        let result = resolve_unit(None, Cursor::new("mm\n"), &mut output);

        assert!(result.is_err());
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT.repeat(2));
    }
}
