//! Hand-rolled argument parsing for the `tabula` binary.

use tabula_diagnostic::emitter::ColorMode;
use tabula_parse::ParseMode;

use crate::DriverError;

/// Where a command reads its source from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    File(String),
    /// Source given on the command line with `-e`.
    Inline(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Lex(Input),
    Parse { input: Input, mode: ParseMode },
    Symtab(Input),
    Table,
    Help,
    Version,
}

/// A fully parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub color: ColorMode,
}

/// Parse arguments, not including the program name.
pub fn parse_args(args: &[String]) -> Result<Invocation, DriverError> {
    let Some((name, rest)) = args.split_first() else {
        return Ok(Invocation {
            command: Command::Help,
            color: ColorMode::Auto,
        });
    };

    let mut color = ColorMode::Auto;
    let mut lenient = false;
    let mut input = None;
    let mut i = 0;
    while i < rest.len() {
        let arg = rest[i].as_str();
        if let Some(value) = arg.strip_prefix("--color=") {
            color = ColorMode::parse(value).ok_or_else(|| {
                DriverError::usage(format!(
                    "invalid color mode '{value}' (expected auto, always or never)"
                ))
            })?;
        } else if arg == "--lenient" {
            lenient = true;
        } else if arg == "-e" {
            let source = rest
                .get(i + 1)
                .ok_or_else(|| DriverError::usage("`-e` needs a source string"))?;
            set_input(&mut input, Input::Inline(source.clone()))?;
            i += 1;
        } else if arg.starts_with('-') {
            return Err(DriverError::usage(format!("unknown option '{arg}'")));
        } else {
            set_input(&mut input, Input::File(arg.to_string()))?;
        }
        i += 1;
    }

    let require_input = |input: Option<Input>| {
        input.ok_or_else(|| DriverError::usage(format!("`{name}` needs a file or `-e <source>`")))
    };

    if lenient && name != "parse" {
        return Err(DriverError::usage("`--lenient` only applies to `parse`"));
    }

    let command = match name.as_str() {
        "lex" => Command::Lex(require_input(input)?),
        "parse" => Command::Parse {
            input: require_input(input)?,
            mode: if lenient {
                ParseMode::Recover
            } else {
                ParseMode::Strict
            },
        },
        "symtab" => Command::Symtab(require_input(input)?),
        "table" => {
            if input.is_some() {
                return Err(DriverError::usage("`table` takes no input"));
            }
            Command::Table
        }
        "help" | "--help" | "-h" => Command::Help,
        "version" | "--version" | "-V" => Command::Version,
        other => return Err(DriverError::usage(format!("unknown command '{other}'"))),
    };
    Ok(Invocation { command, color })
}

fn set_input(slot: &mut Option<Input>, input: Input) -> Result<(), DriverError> {
    if slot.is_some() {
        return Err(DriverError::usage("only one input may be given"));
    }
    *slot = Some(input);
    Ok(())
}
