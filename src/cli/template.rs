use std::path::PathBuf;

use clap::Parser;

use crate::{comparison::CONTRACT_COUNT, contracts_file::ContractsFile, prelude::*};

#[derive(Parser)]
pub struct TemplateArgs {
    #[clap(long, env = "CONTRACTS_PATH", default_value = "contracts.toml")]
    output: PathBuf,

    /// Number of contracts to write.
    #[clap(long = "count", default_value = "2", value_parser = parse_count)]
    n_contracts: usize,

    /// Overwrite the existing file.
    #[clap(long)]
    force: bool,
}

impl TemplateArgs {
    pub fn run(self) -> Result {
        ContractsFile::template(self.n_contracts).write_to(&self.output, self.force)?;
        info!(path = %self.output.display(), n_contracts = self.n_contracts, "written");
        Ok(())
    }
}

fn parse_count(value: &str) -> Result<usize> {
    let n_contracts: usize = value.parse()?;
    ensure!(
        CONTRACT_COUNT.contains(&n_contracts),
        "must be within {}..={}",
        CONTRACT_COUNT.start(),
        CONTRACT_COUNT.end(),
    );
    Ok(n_contracts)
}
