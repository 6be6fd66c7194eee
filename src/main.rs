use chrono::Utc;
use clap::Parser;
use raffle_picker::utils::error::ErrorSeverity;
use raffle_picker::utils::{logger, validation::Validate};
use raffle_picker::{
    reduce, CliConfig, ConfigProvider, RaffleAction, RaffleConfig, RaffleError, RaffleState,
    RngSource,
};

fn main() {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    if config.logging.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting raffle");
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let outcome = if cli.history {
        print_history(&config)
    } else {
        run_draw(&cli, &config)
    };

    if let Err(e) = outcome {
        tracing::error!(
            "Raffle failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        exit_with(&e);
    }
}

fn run_draw(cli: &CliConfig, config: &RaffleConfig) -> raffle_picker::Result<()> {
    let mut rng = RngSource::from_seed_or_os(config.seed());
    let settings = config.draw_settings();

    let mut state = RaffleState::new();
    for raw in cli.participant_inputs()? {
        state = reduce(&state, RaffleAction::AddParticipant(raw), settings, &mut rng)?;
    }

    let state = reduce(&state, RaffleAction::Draw, settings, &mut rng)?;
    println!("{}", state.render());

    if let (Some(ledger), Some(winners)) = (config.winner_ledger(), state.winners()) {
        ledger.record_draw(winners, Utc::now())?;
    }

    Ok(())
}

fn print_history(config: &RaffleConfig) -> raffle_picker::Result<()> {
    let Some(ledger) = config.winner_ledger() else {
        println!("Winner history storage is disabled");
        return Ok(());
    };

    let history = ledger.history()?;
    if history.is_empty() {
        println!("No winners recorded yet");
        return Ok(());
    }

    for record in history {
        let drawn_at = chrono::DateTime::<Utc>::from_timestamp_millis(record.timestamp)
            .map(|at| at.format("%d/%m/%Y %H:%M").to_string())
            .unwrap_or_else(|| record.timestamp.to_string());
        println!("{}  {}", drawn_at, record.name);
    }
    Ok(())
}

fn exit_with(e: &RaffleError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
