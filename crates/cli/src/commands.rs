use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a filter document into a SQL boolean expression
    Compile {
        #[command(flatten)]
        input: FilterInput,

        #[arg(long = "where", help = "Prefix the expression with WHERE")]
        where_clause: bool,

        #[arg(
            long,
            help = "Render literals as placeholders and print the bound values as JSON"
        )]
        params: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Render SQL literals or identifiers
    Quote {
        #[command(subcommand)]
        command: QuoteCommand,
    },
    /// Print the parsed filter tree as JSON
    Ast {
        #[command(flatten)]
        input: FilterInput,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum QuoteCommand {
    /// Render a JSON value as a SQL literal
    Value {
        /// JSON value, e.g. '"text"', 42, true, null or [1, 2]
        json: String,
    },
    /// Render one or more names as quoted identifiers
    Ident {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

/// Where the filter document comes from; stdin when neither is given.
#[derive(Args, Debug)]
pub struct FilterInput {
    #[arg(long, conflicts_with = "file", help = "Filter document as inline JSON")]
    pub filter: Option<String>,

    #[arg(long, help = "Path to a file containing the filter document")]
    pub file: Option<String>,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[arg(long, help = "Maximum nesting depth of the filter document")]
    pub max_depth: Option<usize>,

    #[arg(long, help = "Load KEY=VALUE settings (e.g. FILTER_MAX_DEPTH) from this file")]
    pub env_file: Option<String>,
}
