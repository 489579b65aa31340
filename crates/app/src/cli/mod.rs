use clap::{Parser, Subcommand};

mod db;
mod produit;

#[derive(Debug, Parser)]
#[command(name = "produit-app", about = "Produit admin CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Produit(produit::ProduitCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Produit(command) => produit::run(command).await,
        }
    }
}
