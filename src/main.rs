use clap::Parser as _;
use dotenvy::dotenv;
use stowage::cli::{Cli, Commands};
use stowage::service::StowageService;
use stowage::types::params::StorageArgs;
use stowage::utils::logging::init_logging;
use stowage::StowageResult;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!(
            error = %e,
            error_chain = ?e,
            "Command failed"
        );
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> StowageResult<()> {
    let args = StorageArgs::try_from(cli.storage_args)?;
    let service = StowageService::setup(args).await;

    match cli.command {
        Commands::Put { local_path, key } => {
            let url = service.put(&local_path, key.as_deref()).await?;
            info!(url = %url, "Upload complete");
            println!("{}", url);
        }
        Commands::List { prefix } => {
            let keys = service.list(&prefix).await?;
            info!(count = keys.len(), "Listing complete");
            for key in keys {
                println!("{}", key);
            }
        }
        Commands::Get { key, dest_path } => {
            service.get(&key, &dest_path).await?;
            info!(key = %key, dest = %dest_path.display(), "Download complete");
        }
        Commands::Remove { key } => {
            service.remove(&key).await?;
            info!(key = %key, "Delete complete");
        }
    }

    Ok(())
}
