use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::{
    bill::NettingMode,
    cli::consumption::ConsumptionArgs,
    comparison::Comparison,
    contracts_file::ContractsFile,
    prelude::*,
    tables::{build_comparison_table, build_netting_table, build_prices_table, suppliers},
};

#[derive(Copy, Clone, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,

    /// Pretty-printed JSON.
    Json,
}

#[derive(Parser)]
pub struct CompareArgs {
    /// TOML file with the contracts to compare.
    #[clap(long = "contracts", env = "CONTRACTS_PATH", default_value = "contracts.toml")]
    contracts_path: PathBuf,

    #[clap(flatten)]
    consumption: ConsumptionArgs,

    /// Netting of the feed-in against the low-rate consumption.
    #[clap(long, env = "NETTING_MODE", value_enum, default_value_t)]
    netting: NettingMode,

    /// Also show the prices and the netting breakdown.
    #[clap(long)]
    details: bool,

    #[clap(long, value_enum, default_value_t)]
    format: OutputFormat,
}

impl CompareArgs {
    pub fn run(self) -> Result {
        let contracts = ContractsFile::read_from(&self.contracts_path)?.contracts;
        let comparison =
            Comparison::try_new(self.consumption.to_consumption(), contracts, self.netting)?;
        info!(suppliers = %suppliers(&comparison), "compared");
        if let Some(cheapest) = comparison.cheapest() {
            info!(
                supplier = %cheapest.supplier,
                total = %cheapest.bill.total.round_to_cents(),
                "cheapest",
            );
        }

        match self.format {
            OutputFormat::Table => {
                println!("{}", build_comparison_table(&comparison));
                if self.details {
                    println!("{}", build_prices_table(&comparison));
                    if let Some(entry) = comparison.entries.first() {
                        println!("{}", build_netting_table(&entry.bill.netting));
                    }
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Args, Command};

    #[test]
    fn test_parse_compare() {
        let args = Args::parse_from([
            "contrast",
            "compare",
            "--contracts",
            "offers.toml",
            "--netting",
            "proportional",
            "--format",
            "json",
            "--details",
        ]);
        let Command::Compare(args) = args.command else {
            panic!("expected the compare command");
        };
        assert_eq!(args.contracts_path, PathBuf::from("offers.toml"));
        assert_eq!(args.netting, NettingMode::Proportional);
        assert!(matches!(args.format, OutputFormat::Json));
        assert!(args.details);
    }
}
