use clap::Parser;
use kennel::core::demo;
use kennel::utils::logger;
use kennel::PoodleConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = PoodleConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("Poodle config: {:?}", config);

    let poodle = config.to_poodle();

    if config.json {
        println!("{}", demo::to_json(&poodle)?);
        return Ok(());
    }

    for line in demo::poodle_report(&poodle) {
        println!("{}", line);
    }

    Ok(())
}
