use clap::{Args, Subcommand};

mod add;
mod list;

#[derive(Debug, Args)]
pub(crate) struct ProduitCommand {
    #[command(subcommand)]
    command: ProduitSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProduitSubcommand {
    List(list::ListProduitsArgs),
    Add(add::AddProduitArgs),
}

pub(crate) async fn run(command: ProduitCommand) -> Result<(), String> {
    match command.command {
        ProduitSubcommand::List(args) => list::run(args).await,
        ProduitSubcommand::Add(args) => add::run(args).await,
    }
}
