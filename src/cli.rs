use crate::app::AppDef;
use crate::harness::{Action, Handlers, Harness};
use crate::input::ScriptedInput;
use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "formdeck",
    version,
    about = "Form + console application scaffold with optional TUI"
)]
pub struct Cli {
    /// Path to a JSON app definition (title, prompts, options)
    #[arg(long)]
    pub app: Option<std::path::PathBuf>,

    /// Run once without the TUI and print the console to stdout
    #[arg(long)]
    pub text: bool,

    /// Pre-fill a form field before running, e.g. --set 0=Ada (repeatable)
    #[arg(long, value_name = "INDEX=VALUE")]
    pub set: Vec<String>,

    /// Canned response for a modal prompt, consumed in order (repeatable)
    #[arg(long, value_name = "VALUE")]
    pub input: Vec<String>,

    /// In text mode, also export the console to <title>.txt
    #[arg(long)]
    pub print: bool,
}

pub fn run(args: Cli) -> Result<()> {
    if args.print && !args.text {
        return Err(anyhow::anyhow!(
            "--print can only be used with --text. Use --print --text together."
        ));
    }

    let def = match &args.app {
        Some(path) => AppDef::load(path)?,
        None => crate::demo::definition(),
    };
    // JSON-defined apps get the template defaults; the built-in definition
    // gets the sample handlers.
    let handlers = if args.app.is_some() {
        Handlers::new()
    } else {
        crate::demo::handlers()
    };

    let mut harness = Harness::new(&def);
    for pair in &args.set {
        let (index, value) = parse_set(pair)?;
        harness.form.set_field(index, value);
    }

    if args.text {
        return run_text(&args, harness, handlers);
    }

    #[cfg(feature = "tui")]
    return crate::tui::run(harness, handlers);

    // Fallback when built without TUI support.
    #[cfg(not(feature = "tui"))]
    return run_text(&args, harness, handlers);
}

fn run_text(args: &Cli, mut harness: Harness, mut handlers: Handlers) -> Result<()> {
    let mut input = ScriptedInput::new(args.input.iter().cloned());
    harness.dispatch(Action::Run, &mut input, &mut handlers);
    print!("{}", harness.console.text());
    for message in &input.messages {
        eprintln!("{message}");
    }
    if args.print {
        harness.dispatch(Action::Print, &mut input, &mut handlers);
        println!("{}", harness.status);
    }
    Ok(())
}

fn parse_set(pair: &str) -> Result<(usize, String)> {
    let (index, value) = pair
        .split_once('=')
        .with_context(|| format!("expected INDEX=VALUE, got \"{pair}\""))?;
    let index = index
        .trim()
        .parse()
        .with_context(|| format!("field index must be a number in \"{pair}\""))?;
    Ok((index, value.to_string()))
}
