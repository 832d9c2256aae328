mod debug_report;

use firerules::{JsonValue, Options, RuleNode, compile_verbose_with};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

const LOG_ENV: &str = "FIRERULES_LOG";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn")).init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let text = match read_input(config.input.as_ref()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let tree: JsonValue = match serde_json::from_str(&text) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("error: input is not valid JSON: {err}");
            std::process::exit(2);
        }
    };

    let options = if config.strict { Options::strict() } else { Options::default() };
    let result = match compile_verbose_with(&RuleNode::from(tree), &options) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let rendered =
        if config.compact { serde_json::to_string(&result.rules) } else { serde_json::to_string_pretty(&result.rules) };
    match rendered {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: failed to serialize rules: {err}");
            std::process::exit(1);
        }
    }

    if config.report {
        debug_report::print_report(&config.source_label(), &options, &result.details, config.color);
    }
}

struct CliConfig {
    input: Option<PathBuf>,
    strict: bool,
    compact: bool,
    report: bool,
    color: bool,
}

impl CliConfig {
    fn source_label(&self) -> String {
        match &self.input {
            Some(path) => path.display().to_string(),
            None => "<stdin>".to_string(),
        }
    }
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<PathBuf> = None;
    let mut strict = false;
    let mut compact = false;
    let mut report = false;
    let mut color = io::stderr().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("firerules {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--strict" => strict = true,
            "--compact" => compact = true,
            "--report" => report = true,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            "-" => {}
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'\n\n{}", help_text()));
            }
            _ => set_input(&mut input, arg)?,
        }
    }

    Ok(CliConfig { input, strict, compact, report, color })
}

fn set_input(input: &mut Option<PathBuf>, value: String) -> Result<(), String> {
    if input.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *input = Some(PathBuf::from(value));
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String, String> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("error: failed to read {}: {err}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
            buffer
        }
    };

    if text.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }
    Ok(text)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "firerules {version}

Compile and check a Realtime Database rules document.

Reads a JSON rule tree with a top-level \"rules\" key and prints the compiled
document on stdout.

Usage:
  firerules [OPTIONS] [FILE]
  firerules [OPTIONS] --input <file>

Options:
  -i, --input <file>         Rules file to read. Reads stdin when omitted or '-'.
  --strict                   Reject unknown '.' keys, malformed '$' wildcards and
                             non-boolean, non-string permissions.
  --compact                  Print single-line JSON.
  --report                   Print a compile report on stderr.
  --color                    Force ANSI color in the report.
  --no-color                 Disable ANSI color in the report.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}              Log filter (default: warn), e.g. {log_env}=debug.

Exit codes:
  0  Success.
  1  The rule tree failed to compile.
  2  Invalid arguments, unreadable input or invalid JSON.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV,
    )
}
