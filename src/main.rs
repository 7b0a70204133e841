use anyhow::Result;
use tokio::sync::mpsc;

use skycast_core::{AppError, Config, PreferenceStore};
use skycast_weather::{ForecastEvent, ForecastLoader, UnitSystem, WeatherClient};

const ERROR_MESSAGE: &str = "An error has occurred. Please try again.";

#[tokio::main]
async fn main() -> Result<()> {
    skycast_core::init()?;

    if let Err(err) = run().await {
        tracing::error!("skycast failed: {err}");
        eprintln!("{}", err.user_message());
        std::process::exit(1);
    }

    Ok(())
}

async fn run() -> Result<(), AppError> {
    let config = Config::load()?;
    let validation = config.validate();
    if !validation.is_valid() {
        return Err(AppError::Config(validation.error_summary()));
    }

    let store = PreferenceStore::from_config(&config);
    apply_arg_overrides(&store);

    let mut changes = store.subscribe();

    let loader = ForecastLoader::new(WeatherClient::new()?);
    let (tx, mut rx) = mpsc::unbounded_channel();
    loader.attach(tx);
    loader.start(store.query());

    // Controller loop: render loader events, reload on preference change.
    loop {
        tokio::select! {
            event = rx.recv() => match event {
                Some(ForecastEvent::Loading) => {
                    tracing::info!("loading forecast for {}", store.query().location);
                }
                Some(ForecastEvent::Loaded(Some(lines))) => {
                    for line in lines.iter() {
                        println!("{line}");
                    }
                    break;
                }
                Some(ForecastEvent::Loaded(None)) => {
                    eprintln!("{ERROR_MESSAGE}");
                    break;
                }
                None => break,
            },
            changed = changes.changed() => {
                if changed.is_ok() {
                    loader.restart(store.query());
                }
            }
        }
    }

    Ok(())
}

/// Command-line overrides for the stored preferences: a bare argument is
/// the location, `--metric`/`--imperial` select the unit system.
fn apply_arg_overrides(store: &PreferenceStore) {
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--metric" => store.set_units(UnitSystem::Metric),
            "--imperial" => store.set_units(UnitSystem::Imperial),
            location => store.set_location(location),
        }
    }
}
