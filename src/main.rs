use anyhow::Result;
use clap::{Parser, Subcommand};
use mealboard::{AppState, config::Config, create_app};
use mealboard_recipe::Catalog;

/// mealboard - Weekly meal planner
#[derive(Parser)]
#[command(name = "mealboard")]
#[command(about = "Weekly meal planner with shopping lists and AI recipe ideas", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Load the recipe catalog and print a summary
    Catalog,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealboard::observability::init_observability(
        "mealboard",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Catalog => catalog_command(config),
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting mealboard server...");

    let host = host_override.unwrap_or(config.server.host);
    let port = port_override.unwrap_or(config.server.port);

    let catalog = Catalog::load(config.catalog.path.as_deref())?;
    let assistant = config.ai.build_assistant()?;

    let app = create_app(
        AppState::new(catalog, assistant).with_sessions(config.session.build_store()),
    );

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

fn catalog_command(config: Config) -> Result<()> {
    let catalog = Catalog::load(config.catalog.path.as_deref())?;

    println!("{} recipes", catalog.len());
    for category in catalog.categories().iter().skip(1) {
        println!("{category}:");
        for recipe in catalog.filter(None, Some(category)) {
            println!("  [{}] {} ({} min)", recipe.id, recipe.name, recipe.total_time());
        }
    }

    Ok(())
}
