use std::ops::RangeInclusive;

use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

use crate::{
    bill::{Bill, NettingMode},
    consumption::Consumption,
    contract::Contract,
    prelude::*,
    quantity::cost::Cost,
};

/// Number of contracts that may be compared at once.
pub const CONTRACT_COUNT: RangeInclusive<usize> = 2..=4;

/// Contracts evaluated against the same household consumption.
#[must_use]
#[derive(Serialize)]
pub struct Comparison {
    pub consumption: Consumption,
    pub netting_mode: NettingMode,
    pub entries: Vec<Entry>,
}

#[must_use]
#[derive(Serialize)]
pub struct Entry {
    pub supplier: String,
    pub contract: Contract,
    pub bill: Bill,

    /// Yearly difference to the cheapest contract.
    pub difference: Cost,
}

impl Comparison {
    #[instrument(skip_all, fields(n_contracts = contracts.len(), ?netting_mode))]
    pub fn try_new(
        consumption: Consumption,
        contracts: Vec<Contract>,
        netting_mode: NettingMode,
    ) -> Result<Self> {
        ensure!(
            CONTRACT_COUNT.contains(&contracts.len()),
            "expected {}..={} contracts to compare, got {}",
            CONTRACT_COUNT.start(),
            CONTRACT_COUNT.end(),
            contracts.len(),
        );
        consumption.validate()?;

        let priced = contracts
            .into_iter()
            .enumerate()
            .map(|(index, contract)| {
                let supplier = contract.display_name(index);
                contract.validate().with_context(|| format!("invalid contract: {supplier}"))?;
                let bill = Bill::calculate(&consumption, &contract, netting_mode);
                debug!(%supplier, total = ?bill.total, monthly_payment = ?bill.monthly_payment);
                Ok((supplier, contract, bill))
            })
            .collect::<Result<Vec<_>>>()?;

        let cheapest_total =
            priced.iter().map(|(_, _, bill)| bill.total).min().unwrap_or(Cost::ZERO);
        let entries = priced
            .into_iter()
            .map(|(supplier, contract, bill)| Entry {
                supplier,
                contract,
                bill,
                difference: bill.total - cheapest_total,
            })
            .collect_vec();

        Ok(Self { consumption, netting_mode, entries })
    }

    /// Indices of the cheapest and the most expensive entries.
    ///
    /// On ties, the cheapest is the first one and the most expensive is the last one.
    pub fn extremes(&self) -> Option<(usize, usize)> {
        match self.entries.iter().map(|entry| entry.bill.total).enumerate().minmax_by_key(
            |(_, total)| *total,
        ) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement((index, _)) => Some((index, index)),
            MinMaxResult::MinMax((min_index, _), (max_index, _)) => Some((min_index, max_index)),
        }
    }

    pub fn cheapest(&self) -> Option<&Entry> {
        self.extremes().map(|(index, _)| &self.entries[index])
    }
}
