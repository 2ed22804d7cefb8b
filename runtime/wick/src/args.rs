//! Command-line parsing.
//!
//! ```text
//! wick coerce <kind> [file]
//! wick count <chunk-kind> [file]
//! wick chunk <chunk-kind> <first> [<last>] [file]
//! wick sort [text|numeric|datetime] [--descending] [file]
//! wick dict get <key> [file]
//! ```
//!
//! Global options: `--number-format=<pattern>`, `--item-delimiter=<char>`,
//! `--line-ending=<lf|crlf|cr>`.

use std::path::PathBuf;

use wick_chunk::{ChunkKind, ChunkSpec, Ordinal};
use wick_value::{LineEnding, SortDirection, SortStyle, ValueConfig, ValueKind};

/// What to do with the input.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Coerce(ValueKind),
    Count(ChunkKind),
    Chunk(ChunkSpec),
    Sort {
        style: SortStyle,
        direction: SortDirection,
    },
    DictGet(String),
}

/// A fully parsed command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Invocation {
    pub command: Command,
    pub config: ValueConfig,
    /// Input file; stdin when absent.
    pub path: Option<PathBuf>,
}

/// Parse the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut config = ValueConfig::default();
    let mut direction = SortDirection::Ascending;
    let mut positional: Vec<&str> = Vec::new();

    for arg in args {
        if let Some(pattern) = arg.strip_prefix("--number-format=") {
            config.number_format = pattern
                .parse()
                .map_err(|err| format!("invalid --number-format: {err}"))?;
        } else if let Some(delimiter) = arg.strip_prefix("--item-delimiter=") {
            config = config.with_item_delimiter(single_char(delimiter)?);
        } else if let Some(ending) = arg.strip_prefix("--line-ending=") {
            config.line_ending = ending
                .parse::<LineEnding>()
                .map_err(|err| err.to_string())?;
        } else if arg == "--descending" {
            direction = SortDirection::Descending;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else {
            positional.push(arg);
        }
    }

    let Some((&name, rest)) = positional.split_first() else {
        return Err("missing command".to_string());
    };
    let mut rest = rest.iter().copied();

    let command = match name {
        "coerce" => Command::Coerce(
            required(rest.next(), "kind")?
                .parse()
                .map_err(|err: wick_value::ValueError| err.to_string())?,
        ),
        "count" => Command::Count(chunk_kind(required(rest.next(), "chunk kind")?)?),
        "chunk" => {
            let kind = chunk_kind(required(rest.next(), "chunk kind")?)?;
            let first = ordinal(required(rest.next(), "first index")?)
                .ok_or_else(|| "first index must be a number, 'last' or 'middle'".to_string())?;
            let mut spec = ChunkSpec::at(kind, first);
            let mut peek = rest.clone();
            if let Some(last) = peek.next().and_then(ordinal) {
                spec = spec.to(last);
                rest = peek;
            }
            Command::Chunk(spec)
        }
        "sort" => {
            let mut peek = rest.clone();
            let style = match peek.next().map(str::parse::<SortStyle>) {
                Some(Ok(style)) => {
                    rest = peek;
                    style
                }
                _ => SortStyle::Text,
            };
            Command::Sort { style, direction }
        }
        "dict" => match rest.next() {
            Some("get") => Command::DictGet(required(rest.next(), "key")?.to_string()),
            Some(other) => return Err(format!("unknown dict subcommand '{other}'")),
            None => return Err("missing dict subcommand".to_string()),
        },
        other => return Err(format!("unknown command '{other}'")),
    };

    let path = rest.next().map(PathBuf::from);
    if let Some(extra) = rest.next() {
        return Err(format!("unexpected argument '{extra}'"));
    }
    Ok(Invocation {
        command,
        config,
        path,
    })
}

fn required<'a>(arg: Option<&'a str>, what: &str) -> Result<&'a str, String> {
    arg.ok_or_else(|| format!("missing {what}"))
}

fn chunk_kind(name: &str) -> Result<ChunkKind, String> {
    name.parse().map_err(|err: wick_chunk::UnknownChunkKind| err.to_string())
}

fn single_char(text: &str) -> Result<char, String> {
    let unescaped = match text {
        "\\t" | "tab" => "\t",
        "\\n" => "\n",
        other => other,
    };
    let mut chars = unescaped.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("item delimiter must be one character, got '{text}'")),
    }
}

/// `3`, `-1`, `last` or `middle`.
fn ordinal(text: &str) -> Option<Ordinal> {
    match text.to_ascii_lowercase().as_str() {
        "last" => Some(Ordinal::Last),
        "middle" | "mid" => Some(Ordinal::Middle),
        other => other.parse::<i64>().ok().map(Ordinal::Nth),
    }
}
