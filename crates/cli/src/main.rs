use crate::{
    commands::{Commands, ConfigArgs, FilterInput, QuoteCommand},
    env::EnvManager,
    error::CliError,
};
use clap::Parser;
use model::core::value::Value;
use planner::{
    CompilerConfig, SqlFilter, query::dialect::MySql, render, render_identifiers,
    render_parameterized, render_value,
};
use std::io::Read;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod env;
mod error;

#[derive(Parser)]
#[command(
    name = "docwhere",
    version = "0.1.0",
    about = "Compile document-style filters into SQL WHERE expressions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout only carries SQL
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run_command(cli.command, std::io::stdin())?;
    println!("{output}");
    Ok(())
}

fn run_command(command: Commands, stdin: impl Read) -> Result<String, CliError> {
    execute(command, stdin).inspect_err(|e| error!("{e}"))
}

fn execute(command: Commands, stdin: impl Read) -> Result<String, CliError> {
    match command {
        Commands::Compile {
            input,
            where_clause,
            params,
            config,
        } => {
            let config = load_config(&config)?;
            let doc = read_filter(&input, stdin)?;
            let node = config.builder().build(&doc)?;
            info!(columns = ?node.columns(), "Compiled filter");

            if params {
                let (sql, values) = render_parameterized(&node, &MySql);
                let sql = if where_clause { format!("WHERE {sql}") } else { sql };
                let bound = Value::List(values).to_json();
                let bound = serde_json::to_string(&bound).map_err(CliError::JsonSerialize)?;
                Ok(format!("{sql}\n{bound}"))
            } else if where_clause {
                let sql = SqlFilter::with_expr(node).to_sql(&MySql);
                Ok(sql.trim_start().to_string())
            } else {
                Ok(render(&node, &MySql))
            }
        }
        Commands::Quote { command } => match command {
            QuoteCommand::Value { json } => {
                let value: serde_json::Value = serde_json::from_str(&json)?;
                Ok(render_value(&Value::from(value)))
            }
            QuoteCommand::Ident { names } => {
                let names = names.iter().map(String::as_str).collect::<Vec<_>>();
                Ok(render_identifiers(&names).join(", "))
            }
        },
        Commands::Ast { input, config } => {
            let config = load_config(&config)?;
            let doc = read_filter(&input, stdin)?;
            let node = config.builder().build(&doc)?;
            serde_json::to_string_pretty(&node).map_err(CliError::JsonSerialize)
        }
    }
}

/// Environment (and env file) first, then explicit flags.
fn load_config(args: &ConfigArgs) -> Result<CompilerConfig, CliError> {
    let mut env = EnvManager::from_system();
    if let Some(path) = &args.env_file {
        env.load_from_file(path)?;
    }

    let mut config = CompilerConfig::from_lookup(|key| env.get(key).map(str::to_string))?;
    if let Some(max_depth) = args.max_depth {
        config = config.with_max_depth(max_depth)?;
    }
    debug!(?config, "Resolved compiler configuration");
    Ok(config)
}

fn read_filter(input: &FilterInput, mut stdin: impl Read) -> Result<serde_json::Value, CliError> {
    let source = match (&input.filter, &input.file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&source)?)
}
