//! Command execution. Each command reads the whole input as one text value
//! and returns the text to print.

use wick_value::{
    convert_to, Address, Coerce, Dictionary, Value, ValueConfig, ValueResult, VariableStore,
};

use crate::args::Command;

/// Name of the variable `sort` works on.
const SORT_VARIABLE: &str = "input";

/// Run `command` over `input`.
#[tracing::instrument(level = "debug", skip(input, config))]
pub fn run(command: &Command, input: &str, config: ValueConfig) -> ValueResult<String> {
    match command {
        Command::Coerce(kind) => {
            let converted = convert_to(*kind, &Value::text(trim_final_newline(input)), &config)?;
            converted.to_text(&config)
        }
        Command::Count(kind) => {
            Ok(wick_chunk::text::count(input, *kind, &config.delimiters).to_string())
        }
        Command::Chunk(spec) => {
            let chunk = Value::chunk(Value::text(input), Address::Chunk(*spec));
            chunk.to_text(&config)
        }
        Command::Sort { style, direction } => {
            let mut store = VariableStore::with_config(config);
            store.set(SORT_VARIABLE, Value::text(trim_final_newline(input)))?;
            store.sort(SORT_VARIABLE, *style, *direction)?;
            store.contents(SORT_VARIABLE).to_text(&store)
        }
        Command::DictGet(key) => {
            let dict = Dictionary::convert(&Value::text(input), &config)?;
            let entry = Value::chunk(Value::Dictionary(dict), Address::Key(key.clone()));
            entry.to_text(&config)
        }
    }
}

/// Input files usually end with one line terminator that is not part of
/// the value.
fn trim_final_newline(input: &str) -> &str {
    input
        .strip_suffix("\r\n")
        .or_else(|| input.strip_suffix('\n'))
        .unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wick_chunk::{ChunkKind, ChunkSpec};
    use wick_value::{LineEnding, SortDirection, SortStyle, ValueKind};

    fn lf() -> ValueConfig {
        ValueConfig::default().with_line_ending(LineEnding::Lf)
    }

    fn run_ok(command: &Command, input: &str) -> String {
        match run(command, input, lf()) {
            Ok(output) => output,
            Err(err) => panic!("{command:?} failed: {err}"),
        }
    }

    #[test]
    fn coerce_normalizes_numbers() {
        assert_eq!(
            run_ok(&Command::Coerce(ValueKind::Decimal), "2.500\n"),
            "2.5"
        );
        assert_eq!(run_ok(&Command::Coerce(ValueKind::Boolean), "TRUE"), "true");
        let Err(err) = run(&Command::Coerce(ValueKind::Integer), "abc", lf()) else {
            panic!("text should not coerce to an integer");
        };
        assert_eq!(err.message, "cannot convert value to integer");
    }

    #[test]
    fn count_and_chunk() {
        assert_eq!(run_ok(&Command::Count(ChunkKind::Word), "  foo   bar "), "2");
        assert_eq!(run_ok(&Command::Count(ChunkKind::Item), "a,b,"), "2");
        assert_eq!(
            run_ok(
                &Command::Chunk(ChunkSpec::range(ChunkKind::Line, 2, 3)),
                "one\ntwo\nthree\n"
            ),
            "two\nthree"
        );
    }

    #[test]
    fn sort_lines() {
        let command = Command::Sort {
            style: SortStyle::Numeric,
            direction: SortDirection::Ascending,
        };
        assert_eq!(run_ok(&command, "10\n9\n100\n"), "9\n10\n100");
    }

    #[test]
    fn dict_get_reads_entries() {
        let input = "{\n\tname = wick\n\tinner = {\n\t\tx = 1\n\t}\n}\n";
        assert_eq!(run_ok(&Command::DictGet("name".into()), input), "wick");
        assert_eq!(
            run_ok(&Command::DictGet("inner".into()), input),
            "{\n\tx = 1\n}"
        );
        assert_eq!(run_ok(&Command::DictGet("missing".into()), input), "");
        assert!(run(&Command::DictGet("name".into()), "not a dictionary", lf()).is_err());
    }
}
