use clap::Parser;
use kennel::core::demo;
use kennel::utils::{logger, validation::Validate};
use kennel::{CliConfig, RosterConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting kennel");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let Some(path) = &config.config else {
        let dog = config.to_dog();
        if config.json {
            println!("{}", demo::to_json(&dog)?);
        } else {
            for line in demo::dog_report(&dog) {
                println!("{}", line);
            }
        }
        return Ok(());
    };

    tracing::info!("📁 Loading roster from: {}", path);
    let roster = match RosterConfig::from_file(path).and_then(|r| r.validate().map(|_| r)) {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("Failed to load roster '{}': {}", path, e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let breeds = roster.breeds();
    tracing::info!("🐕 {} has {} dogs", roster.kennel.name, breeds.len());

    if config.json {
        println!("{}", demo::roster_json(&breeds)?);
    } else {
        for line in demo::roster_report(&breeds) {
            println!("{}", line);
        }
    }

    Ok(())
}
