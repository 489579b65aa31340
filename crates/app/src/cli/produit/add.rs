use clap::Args;
use produit_app::{
    context::AppContext,
    database,
    domain::products::data::ProductDraft,
};
use rust_decimal::Decimal;

#[derive(Debug, Args)]
pub(crate) struct AddProduitArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Product name
    #[arg(long)]
    nom: String,

    /// Product description, at least 20 characters
    #[arg(long)]
    description: String,

    /// Unit price, e.g. 1.50
    #[arg(long)]
    prix: Decimal,
}

pub(crate) async fn run(args: AddProduitArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let produit = AppContext::from_pool(pool)
        .products
        .create_product(ProductDraft {
            nom: Some(args.nom),
            description: Some(args.description),
            prix: Some(args.prix),
        })
        .await
        .map_err(|error| format!("failed to add product: {error}"))?;

    println!("id: {}", produit.id);
    println!("nom: {}", produit.nom);

    Ok(())
}
