//! Command-line option parsing.

use scm_indent::table::parse_override;
use scm_indent::{FormTable, IndentConfig};

use crate::CliError;

/// Settings shared by every command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndentOptions {
    pub config: IndentConfig,
    /// Built-in keywords plus `--policy` overrides.
    pub table: FormTable,
    /// Report instead of print (`fmt` only).
    pub check: bool,
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self {
            config: IndentConfig::default(),
            table: FormTable::scheme(),
            check: false,
        }
    }
}

/// Options and the remaining positional arguments, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedArgs {
    pub options: IndentOptions,
    pub positional: Vec<String>,
}

impl ParsedArgs {
    /// Exactly `N` positional arguments, named for error messages.
    pub fn positionals<const N: usize>(
        &self,
        names: [&'static str; N],
    ) -> Result<[&str; N], CliError> {
        if let Some(extra) = self.positional.get(N) {
            return Err(CliError::UnexpectedArgument(extra.clone()));
        }
        let mut values = [""; N];
        for (i, name) in names.into_iter().enumerate() {
            values[i] = self
                .positional
                .get(i)
                .map(String::as_str)
                .ok_or(CliError::MissingArgument(name))?;
        }
        Ok(values)
    }
}

/// Parse the arguments following the command name.
///
/// Later `--policy` entries for the same symbol win.
pub fn parse_options(args: &[String]) -> Result<ParsedArgs, CliError> {
    let mut options = IndentOptions::default();
    let mut positional = Vec::new();

    for arg in args {
        if arg == "--check" {
            options.check = true;
        } else if let Some(width) = arg.strip_prefix("--tab-width=") {
            options.config.tab_width = match width.parse::<u32>() {
                Ok(width) if width > 0 => width,
                _ => return Err(CliError::InvalidTabWidth(width.to_owned())),
            };
        } else if let Some(entry) = arg.strip_prefix("--policy=") {
            let (symbol, policy) = parse_override(entry)?;
            options.table.insert(symbol, policy);
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else {
            positional.push(arg.clone());
        }
    }

    Ok(ParsedArgs {
        options,
        positional,
    })
}

#[cfg(test)]
mod tests;
