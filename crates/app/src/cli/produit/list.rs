use clap::Args;
use produit_app::{context::AppContext, database};

#[derive(Debug, Args)]
pub(crate) struct ListProduitsArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Only list products whose description contains this keyword
    #[arg(long)]
    description: Option<String>,
}

pub(crate) async fn run(args: ListProduitsArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let products = AppContext::from_pool(pool).products;

    let produits = match args.description {
        Some(keyword) => products.search_products(keyword).await,
        None => products.list_products().await,
    }
    .map_err(|error| format!("failed to list products: {error}"))?;

    if produits.is_empty() {
        println!("no products found");
        return Ok(());
    }

    for produit in produits {
        println!("id: {}", produit.id);
        println!("nom: {}", produit.nom);
        println!("description: {}", produit.description);
        println!("prix: {}", produit.prix);
        println!();
    }

    Ok(())
}
