//! `list` command.

use simucredito_gateway::{HttpSimulationGateway, SimulationGateway};
use simucredito_shared::AppConfig;
use simucredito_shared::types::{Currency, Money, NumberFormat, Precision};

/// Prints one line per stored simulation.
pub async fn run(config: &AppConfig) -> anyhow::Result<()> {
    let gateway = HttpSimulationGateway::from_config(&config.gateway)?;
    let items = gateway.list().await?;

    if items.is_empty() {
        println!("No simulations found");
        return Ok(());
    }

    let number_format = NumberFormat::ES_PE;
    for item in &items {
        let financed = item
            .summary
            .as_ref()
            .and_then(|s| s.financing_amount)
            .unwrap_or_default();
        let monthly = item
            .key_indicators
            .as_ref()
            .and_then(|k| k.monthly_payment)
            .unwrap_or_default();

        println!(
            "{}\t{}\t{}\t{}\t{}",
            item.id,
            item.client_name().unwrap_or("N/A"),
            Money::new(financed, Currency::Pen).format(&number_format, Precision::AMOUNT),
            Money::new(monthly, Currency::Pen).format(&number_format, Precision::Exactly(2)),
            item.created_at.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}
