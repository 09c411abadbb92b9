//! Compute command implementation
//!
//! Computes a cost breakdown for a scenario in the selected model mode.

use landed_model::breakdown::{Breakdown, CostComponent};
use landed_model::compiler::CostModel;
use tracing::info;

use crate::{config, CliError, Result};

/// Run the compute command
pub fn run(scenario: &str, model: &str, format: &str) -> Result<()> {
    info!("Computing cost breakdown...");
    info!("  Scenario: {}", scenario);
    info!("  Model: {}", model);

    let snapshot = config::load_scenario(scenario)?;
    let mode = parse_model(model)?;
    let breakdown = mode.compute(&snapshot)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        }
        "table" => render_table(&breakdown),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Compute complete");
    Ok(())
}

pub(crate) fn parse_model(model: &str) -> Result<CostModel> {
    match model {
        "itemised" => Ok(CostModel::Itemised),
        "landed-value" => Ok(CostModel::LandedValue),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown model: {}. Supported: itemised, landed-value",
            other
        ))),
    }
}

fn render_table(breakdown: &Breakdown<f64>) {
    match breakdown {
        Breakdown::Itemised(itemised) => {
            println!("\n┌──────┬──────────────────────────────────┬──────────────┐");
            println!("│ Code │ Component                        │ Value        │");
            println!("├──────┼──────────────────────────────────┼──────────────┤");
            for component in CostComponent::ALL {
                println!(
                    "│ {:<4} │ {:<32} │ {:>12.2} │",
                    component.code(),
                    component.label(),
                    itemised.component(component)
                );
            }
            println!("└──────┴──────────────────────────────────┴──────────────┘");
            println!("CIF value:                {:>14.2}", itemised.cif_value);
            println!(
                "Total acquisition cost:   {:>14.2}",
                itemised.total_acquisition_cost
            );
            println!(
                "Optimisation savings:     {:>13.2}%",
                itemised.optimisation_savings_pct
            );
            println!(
                "Risk-adjusted total:      {:>14.2}",
                itemised.risk_adjusted_total
            );
        }
        Breakdown::LandedValue(landed) => {
            println!("\nFOB:                      {:>14.2}", landed.fob);
            println!("Freight:                  {:>14.2}", landed.freight);
            println!("Insurance:                {:>14.2}", landed.insurance);
            println!("CIF value:                {:>14.2}", landed.cif_value);
            println!("Duties:                   {:>14.2}", landed.duties);
            println!("VAT:                      {:>14.2}", landed.vat);
            println!("Other taxes:              {:>14.2}", landed.other_taxes);
            println!("Total levies:             {:>14.2}", landed.total_levies);
            println!("Customs expenses:         {:>14.2}", landed.customs_expenses);
            println!(
                "Operational expenses:     {:>14.2}",
                landed.operational_expenses
            );
            println!(
                "Total import cost:        {:>14.2}",
                landed.total_import_cost
            );
            println!("Financed total:           {:>14.2}", landed.financed_total);
        }
    }
}
