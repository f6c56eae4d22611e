//! Teller interactive banking menu.
//!
//! Main entry point for the Teller console.

mod console;
mod menu;

use std::io;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use teller_core::bank::{Bank, BankSettings};
use teller_shared::{AppConfig, AppError};

use crate::console::Console;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().map_err(AppError::from)?;

    // Initialize tracing; stdout belongs to the menu
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let settings = BankSettings::try_from(&config)?;
    info!(
        currencies = settings.exchange_rates.rates().len(),
        annual_interest_rate = %settings.annual_interest_rate,
        enforce_overdraft = settings.account_policy.enforce_overdraft,
        trusted_transfer_credit = settings.account_policy.trusted_transfer_credit,
        "Bank configured"
    );

    let mut bank = Bank::new(settings);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    menu::run(&mut bank, &mut console)?;

    Ok(())
}
