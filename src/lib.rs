pub mod cli;
pub mod compare;
pub mod config;
pub mod diagnostics;
pub mod frequency;
pub mod ir;
pub mod jaccard;
pub mod load;
pub mod session;
pub mod tokenize;

use anyhow::Result;
use cli::{Cli, Commands};

pub fn run(cli: Cli) -> Result<()> {
    let format = cli.format;
    match cli.command {
        Commands::Common(args) => session::common(&args, format),
        Commands::Search(args) => session::search(&args, format),
        Commands::Similarity(args) => session::similarity(&args, format),
        Commands::Report(args) => session::report(&args, format),
        Commands::Explain => {
            println!("{}", diagnostics::EXPLANATION);
            Ok(())
        }
    }
}
