use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::Parser;
use count_numbers::client::{ApiClient, Presenter, SubmissionState};
use count_numbers::config::CliConfig;
use count_numbers::utils::{logger, validation::Validate};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting count-numbers client");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = ApiClient::new(config.url.clone(), Duration::from_secs(config.timeout_secs));

    if config.health {
        match client.health().await {
            Ok(report) => {
                println!("✅ Service is {}", report.status);
                if let Some(message) = report.message {
                    println!("   {}", message);
                }
            }
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let mut presenter = Presenter::new(client);

    // One-shot mode: classify the given list and exit.
    if let Some(numbers) = config.numbers.clone() {
        let success = matches!(presenter.submit(&numbers).await, SubmissionState::Success(_));
        if success {
            println!("{}", presenter.render());
        } else {
            eprintln!("{}", presenter.render());
            std::process::exit(1);
        }
        return Ok(());
    }

    // Interactive mode: one submission at a time until the user quits.
    println!("{}", presenter.render());
    println!("Type 'quit' to exit.");
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input == "quit" || input == "exit" {
            break;
        }

        presenter.submit(input).await;
        println!("{}", presenter.render());
        prompt()?;
    }

    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
