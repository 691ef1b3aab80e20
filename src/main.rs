// Intergalactic Airways - Main Entry Point

use clap::Parser;
use intergalactic_airways::{Cli, Shell, ShipIndexBuilder, SwapiClient, v_error, verbosity};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            v_error!("❌ {}", e);
            std::process::exit(2);
        }
    };
    verbosity::set_verbosity_level(config.logging.verbosity);
    config.print_summary();

    let mut client = SwapiClient::new(&config.api)?;
    client.set_api_log(config.logging.api_log_path.clone());

    // The shell only starts on a complete index
    let index = match ShipIndexBuilder::from_config(&client, &config).build().await {
        Ok(index) => index,
        Err(e) => {
            v_error!("❌ Could not load starships and pilots: {}", e);
            std::process::exit(1);
        }
    };

    let shell = Shell::new(index);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell.run(stdin.lock(), stdout.lock())?;

    Ok(())
}
