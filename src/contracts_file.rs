use std::{
    fmt::Debug,
    fs::{self, OpenOptions},
    io::Write,
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{contract::Contract, prelude::*};

/// TOML file listing the contracts to compare.
#[must_use]
#[derive(Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContractsFile {
    #[serde(default)]
    pub contracts: Vec<Contract>,
}

impl ContractsFile {
    /// Default-priced contracts to start editing from.
    pub fn template(n_contracts: usize) -> Self {
        let contracts = (0..n_contracts)
            .map(|index| Contract::builder().supplier(format!("Supplier {}", index + 1)).build())
            .collect();
        Self { contracts }
    }

    #[instrument(name = "Reading the contracts…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        let this: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        info!(n_contracts = this.contracts.len(), "read");
        Ok(this)
    }

    /// Write the contracts, refusing to overwrite an existing file unless `force` is set.
    #[instrument(skip(self), name = "Writing the contracts…")]
    pub fn write_to<P: AsRef<Path> + Debug>(&self, path: P, force: bool) -> Result {
        let path = path.as_ref();
        let contents = toml::to_string(self)?;
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(force)
            .create_new(!force)
            .open(path)
            .with_context(|| format!("failed to create `{}`", path.display()))?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use super::*;
    use crate::quantity::price::KilowattHourPrice;

    #[test]
    fn test_read_contracts() {
        let file: ContractsFile = toml::from_str(
            r#"
            [[contracts]]
            supplier = "Vattenfall"

            [contracts.electricity]
            feed_in_price_per_kwh = 0.0

            [[contracts]]
            supplier = "Budget Energie"

            [contracts.gas]
            price_per_cubic_meter = 1.19
            monthly_fee = 6.25
            "#,
        )
        .unwrap();
        assert_eq!(file.contracts.len(), 2);
        assert_eq!(file.contracts[0].electricity.feed_in_price, KilowattHourPrice::ZERO);
        assert_eq!(file.contracts[1].supplier, "Budget Energie");
    }

    #[test]
    fn test_template_round_trip() {
        let path = env::temp_dir().join(format!("contrast-template-{}.toml", process::id()));
        let _ = fs::remove_file(&path);

        ContractsFile::template(3).write_to(&path, false).unwrap();
        assert!(ContractsFile::template(2).write_to(&path, false).is_err());
        ContractsFile::template(2).write_to(&path, true).unwrap();

        let file = ContractsFile::read_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(file.contracts.len(), 2);
        assert_eq!(file.contracts[1].supplier, "Supplier 2");
        file.contracts.iter().try_for_each(Contract::validate).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let error = ContractsFile::read_from("/nonexistent/contracts.toml").err().unwrap();
        assert!(error.to_string().starts_with("failed to read"));
    }
}
