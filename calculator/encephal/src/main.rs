use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use encephal::{parse_finite, render_assessment, render_inputs, render_json, ReplSession};
use encephal_config::{CalculatorConfig, ConfigError};
use encephal_core::Calculator;
use log::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "encephal",
    version,
    about = "Risk calculator for encephalopathy in acute pancreatitis",
    long_about = "encephal estimates the risk of pancreatitis-associated encephalopathy on\n\
        observation day 1 and day 3 from alcohol history, bilirubin, creatinine,\n\
        SOFA score and urea, and prints the matching treatment advisory.\n\n\
        EXAMPLES:\n\
        \n  encephal                                     Start an interactive session\n\
        \n  encephal calc --alcohol --bilirubin 2.5 --creatinine 80 --sofa 3\n\
        \n  encephal --config clinic.json calc --urea 10 --json\n\
        \n  encephal config                              Print the effective constants"
)]
struct Cli {
    /// Log level (error, warn, info, debug, trace or off); `-ll` is also accepted
    #[arg(
        short = 'l',
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info",
        global = true
    )]
    log_level: LevelFilter,

    /// JSON file overriding the built-in clinical constants
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start an interactive session (default)
    Repl,

    /// Assess a single set of inputs and exit
    Calc(CalcArgs),

    /// Print the effective configuration as JSON
    Config,
}

#[derive(Debug, Args, Clone, Default)]
struct CalcArgs {
    /// History of alcohol abuse
    #[arg(long)]
    alcohol: bool,

    /// Total bilirubin
    #[arg(
        long,
        default_value_t = 0.0,
        allow_negative_numbers = true,
        value_parser = parse_finite
    )]
    bilirubin: f64,

    /// Serum creatinine
    #[arg(
        long,
        default_value_t = 0.0,
        allow_negative_numbers = true,
        value_parser = parse_finite
    )]
    creatinine: f64,

    /// SOFA score
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    sofa: i32,

    /// Serum urea
    #[arg(
        long,
        default_value_t = 0.0,
        allow_negative_numbers = true,
        value_parser = parse_finite
    )]
    urea: f64,

    /// Emit the assessment as JSON
    #[arg(long)]
    json: bool,
}

fn init_logging(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(buf, "{style}{}{style:#} {}", record.level(), record.args())
        })
        .try_init();
}

/// Rewrite the two-letter `-ll` flag to `--log-level`, which clap cannot
/// express as a short option.
fn normalize_cli_args(args: Vec<OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|a| {
            let s = a.to_string_lossy().into_owned();
            if s == "-ll" {
                OsString::from("--log-level")
            } else if let Some(level) = s.strip_prefix("-ll=") {
                OsString::from(format!("--log-level={level}"))
            } else {
                a
            }
        })
        .collect()
}

fn load_config(path: Option<&Path>) -> Result<CalculatorConfig, ConfigError> {
    match path {
        Some(p) => {
            let config = CalculatorConfig::from_path(p)?;
            log::info!("loaded configuration from {}", p.display());
            Ok(config)
        }
        None => Ok(CalculatorConfig::default()),
    }
}

fn run_calc(config: CalculatorConfig, args: &CalcArgs) -> i32 {
    let mut calc = Calculator::with_config(config);
    calc.set_alcohol(args.alcohol);
    calc.set_bilirubin(args.bilirubin);
    calc.set_creatinine(args.creatinine);
    calc.set_sofa(args.sofa);
    calc.set_urea(args.urea);
    let assessment = calc.assess();

    if args.json {
        match render_json(calc.input(), &assessment) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("error: cannot serialize assessment: {e}");
                return 2;
            }
        }
    } else {
        let mut lines = render_inputs(calc.input());
        lines.extend(render_assessment(&assessment, &calc.config().unknown_label));
        for l in lines {
            println!("{l}");
        }
    }
    0
}

fn run_config(config: &CalculatorConfig) -> i32 {
    match config.to_json_pretty() {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            2
        }
    }
}

fn run_repl(config: CalculatorConfig) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    let mut rl = match DefaultEditor::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    let mut session = ReplSession::new(config);
    println!("type :help for commands");
    loop {
        match rl.readline(session.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse_from(normalize_cli_args(std::env::args_os().collect()));
    init_logging(cli.log_level);

    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => run_repl(config),
        Command::Calc(args) => run_calc(config, &args),
        Command::Config => run_config(&config),
    }
}

fn main() {
    std::process::exit(run_cli());
}
