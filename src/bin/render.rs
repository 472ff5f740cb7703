use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::process::ExitCode;

use pegrules::{
    backends::json::JsonGenerator,
    error::Result,
    grammar::RuleTable,
    render::Renderer,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Render script to execute
    script: String,

    /// Write the rendered text here instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Export the rule table of the root scope as JSON
    #[arg(long, value_name = "FILE")]
    rules_json: Option<String>,
}

fn run(args: &Args) -> Result<()> {
    let mut renderer = Renderer::new();
    let rendered = renderer.render_file(&args.script)?;

    match &args.output {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(rendered.as_bytes())?;
            log::info!("Wrote rendered output to {}", path);
        },
        None => std::io::stdout().write_all(rendered.as_bytes())?,
    }

    if let Some(path) = &args.rules_json {
        let table = RuleTable::load(renderer.scope())?;
        JsonGenerator::new().generate(path, &table)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}
