//! Wick CLI
//!
//! Runs value-core operations over a file or stdin.

use std::io::Read;

use wick::args::{parse_args, Invocation};
use wick::commands::run;

fn main() {
    wick::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return;
    }

    let Invocation {
        command,
        config,
        path,
    } = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    let input = match &path {
        Some(path) => std::fs::read_to_string(path).map_err(|err| (path.display().to_string(), err)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map(|_| buffer)
                .map_err(|err| ("<stdin>".to_string(), err))
        }
    };
    let input = match input {
        Ok(input) => input,
        Err((source, err)) => {
            eprintln!("error: cannot read {source}: {err}");
            std::process::exit(1);
        }
    };

    match run(&command, &input, config) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: wick <command> [options] [file]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  coerce <kind>                    Convert the input to a value kind");
    eprintln!("  count <chunk-kind>               Count characters, words, lines, items, ...");
    eprintln!("  chunk <chunk-kind> <first> [<last>]");
    eprintln!("                                   Print the addressed chunks");
    eprintln!("  sort [text|numeric|datetime]     Sort the input's lines");
    eprintln!("  dict get <key>                   Read a dictionary entry");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --number-format=<pattern>   Number rendering, e.g. 0.00 (default: 0.######)");
    eprintln!("  --item-delimiter=<char>     Item delimiter (default: ,)");
    eprintln!("  --line-ending=<lf|crlf|cr>  Line ending used when joining lines");
    eprintln!("  --descending                Sort in descending order");
    eprintln!();
    eprintln!("Input is read from stdin when no file is given.");
    eprintln!("Set RUST_LOG=wick_value=debug to trace coercions.");
}
