use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    bill::Netting,
    comparison::{Comparison, Entry},
    quantity::cost::Cost,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn header(comparison: &Comparison) -> Vec<Cell> {
    let mut header = vec![Cell::new("")];
    header.extend(
        comparison
            .entries
            .iter()
            .map(|entry| Cell::new(&entry.supplier).add_attribute(Attribute::Bold)),
    );
    header
}

fn row(title: &str, comparison: &Comparison, cell: impl Fn(usize, &Entry) -> Cell) -> Vec<Cell> {
    let mut row = vec![Cell::new(title)];
    row.extend(
        comparison
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| cell(index, entry).set_alignment(CellAlignment::Right)),
    );
    row
}

/// Side-by-side yearly costs of the compared contracts.
pub fn build_comparison_table(comparison: &Comparison) -> Table {
    let (cheapest, most_expensive) = comparison.extremes().unwrap_or_default();
    let cheapest_total = comparison.entries.get(cheapest).map(|entry| entry.bill.total);

    let mut table = new_table();
    table.set_header(header(comparison));
    table.add_row(row("Yearly gas", comparison, |_, entry| {
        Cell::new(entry.bill.gas.round_to_cents())
    }));
    table.add_row(row("Yearly electricity", comparison, |_, entry| {
        Cell::new(entry.bill.electricity.round_to_cents())
    }));
    table.add_row(row("Yearly total", comparison, |index, entry| {
        let color = if index == cheapest {
            Color::Green
        } else if index == most_expensive && Some(entry.bill.total) > cheapest_total {
            Color::Red
        } else {
            Color::Reset
        };
        Cell::new(entry.bill.total.round_to_cents()).fg(color).add_attribute(Attribute::Bold)
    }));
    table.add_row(row("Monthly payment", comparison, |_, entry| {
        Cell::new(entry.bill.monthly_payment.round_to_cents())
    }));
    table.add_row(row("Difference", comparison, |_, entry| {
        let cell = Cell::new(entry.difference.round_to_cents());
        if entry.difference >= Cost::ONE_CENT {
            cell.fg(Color::Red)
        } else {
            cell.add_attribute(Attribute::Dim)
        }
    }));
    table
}

/// Prices of the compared contracts.
pub fn build_prices_table(comparison: &Comparison) -> Table {
    let mut table = new_table();
    table.set_header(header(comparison));
    table.add_row(row("Gas per m³", comparison, |_, entry| {
        Cell::new(entry.contract.gas.price_per_cubic_meter)
    }));
    table.add_row(row("Gas monthly fee", comparison, |_, entry| {
        Cell::new(entry.contract.gas.monthly_fee)
    }));
    table.add_row(row("Electricity normal", comparison, |_, entry| {
        Cell::new(entry.contract.electricity.normal_price)
    }));
    table.add_row(row("Electricity low", comparison, |_, entry| {
        Cell::new(entry.contract.electricity.low_price)
    }));
    table.add_row(row("Electricity monthly fee", comparison, |_, entry| {
        Cell::new(entry.contract.electricity.monthly_fee)
    }));
    table.add_row(row("Feed-in", comparison, |_, entry| {
        Cell::new(entry.contract.electricity.feed_in_price)
    }));
    table
}

/// Offsetting of the feed-in against the consumption, shared by all contracts.
pub fn build_netting_table(netting: &Netting) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Netting", "Volume"]);
    let rows = [
        ("Total consumption", netting.total_consumption.to_string()),
        ("Netted feed-in", netting.netted_feed_in.to_string()),
        ("Excess feed-in", netting.excess_feed_in.to_string()),
        ("Normal-rate share", format!("{:.1}%", netting.normal_share * 100.0)),
        ("Net normal-rate", netting.net_normal.to_string()),
        ("Net low-rate", netting.net_low.to_string()),
    ];
    for (title, value) in rows {
        table.add_row(vec![Cell::new(title), Cell::new(value).set_alignment(CellAlignment::Right)]);
    }
    table
}

/// Comma-separated supplier names.
pub fn suppliers(comparison: &Comparison) -> String {
    comparison.entries.iter().map(|entry| entry.supplier.as_str()).join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bill::NettingMode,
        consumption::Consumption,
        contract::Contract,
        quantity::{energy::KilowattHours, volume::CubicMeters},
    };

    fn comparison() -> Comparison {
        Comparison::try_new(
            Consumption::builder()
                .gas(CubicMeters(1000.0))
                .normal(KilowattHours(2000.0))
                .low(KilowattHours(1500.0))
                .feed_in(KilowattHours(500.0))
                .build(),
            vec![Contract::builder().supplier("Eneco").build(), Contract::default()],
            NettingMode::Legacy,
        )
        .unwrap()
    }

    #[test]
    fn test_comparison_table() {
        let table = build_comparison_table(&comparison());
        assert_eq!(table.row_iter().count(), 5);
        let rendered = table.to_string();
        assert!(rendered.contains("Eneco"));
        assert!(rendered.contains("Supplier 2"));
        assert!(rendered.contains("1562.05 €"));
    }

    #[test]
    fn test_prices_table() {
        let table = build_prices_table(&comparison());
        assert_eq!(table.row_iter().count(), 6);
        assert!(table.to_string().contains("1.250 €/m³"));
    }

    #[test]
    fn test_netting_table() {
        let comparison = comparison();
        let table = build_netting_table(&comparison.entries[0].bill.netting);
        assert_eq!(table.row_iter().count(), 6);
        assert!(table.to_string().contains("500 kWh"));
    }

    #[test]
    fn test_suppliers() {
        assert_eq!(suppliers(&comparison()), "Eneco, Supplier 2");
    }
}
