use boolean_interpreter::engine::Report;
use boolean_interpreter::errors::{InterpError, Result};
use boolean_interpreter::letter::Letter;
use boolean_interpreter::Interpreter;
use clap::Parser;
use serde_json::Value;
use std::io::Write;
use tracing::{debug, Level};

/// Evaluate a boolean expression such as `(true and X) or (Y and not X)`.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Expression over `true`, `false`, `and`, `or`, `not` and letters A-Z
    expr: String,
    /// Bindings as a JSON object, e.g. '{"X": true}'
    #[arg(long)]
    bindings: Option<String>,
    /// Single binding `X=true`; applied after --bindings (repeatable)
    #[arg(long = "set", value_name = "X=BOOL")]
    set: Vec<String>,
    /// Substitute a variable before evaluating, e.g. 'Y=not X'
    #[arg(long, value_name = "X=EXPR")]
    replace: Option<String>,
    /// Print the (substituted) expression before the result
    #[arg(long)]
    tree: bool,
    /// Emit a JSON report instead of a bare result (the report already
    /// carries the rendered expression, so it excludes --tree)
    #[arg(long, conflicts_with = "tree")]
    json: bool,
    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    // Parse CLI arguments.
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    if let Err(e) = run(&args, &mut stdout.lock()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let mut interp = Interpreter::new()?;

    // Build bindings.
    if let Some(raw) = args.bindings.as_ref() {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| InterpError::InvalidBinding(format!("--bindings: {e}")))?;
        interp.context_mut().assign_json(&value)?;
    }
    for pair in &args.set {
        interp.context_mut().assign_pair(pair)?;
    }

    // Compile, then substitute if asked.
    let mut expr = interp.compile(&args.expr)?;
    if let Some(arg) = args.replace.as_ref() {
        let (name, replacement) = arg
            .split_once('=')
            .ok_or_else(|| InterpError::Parse(format!("--replace {arg:?}: expected `X=EXPR`")))?;
        let letter = Letter::try_from(name.trim())?;
        let replacement = interp.compile(replacement)?;
        expr = expr.replace(letter, &replacement, interp.flyweight());
    }
    debug!(
        interned = interp.flyweight().interned_variables(),
        "ready to evaluate"
    );

    // Output result.
    let written = if args.json {
        let report = Report::new(&interp, &expr);
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| InterpError::Render(e.to_string()))?;
        writeln!(out, "{rendered}")
    } else if args.tree {
        writeln!(out, "{expr}").and_then(|_| writeln!(out, "{}", interp.evaluate(&expr)))
    } else {
        writeln!(out, "{}", interp.evaluate(&expr))
    };
    written.map_err(|e| InterpError::Render(e.to_string()))
}
