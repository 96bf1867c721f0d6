use dioxus::prelude::*;
use rust_decimal::Decimal;

use crate::domain::{format_price, FormField, SubmittedEntry, Unit};
use crate::ui::theme;

#[component]
pub fn EntryList(entries: Vec<SubmittedEntry>, export: Option<String>) -> Element {
    let count = entries.len();
    let keyed = entries
        .into_iter()
        .map(|entry| (entry.id.clone(), entry))
        .collect::<Vec<_>>();

    rsx! {
        section { class: theme::DISPLAY_WRAPPER,
            h2 { "Submitted Data ({count})" }
            if count == 0 {
                p { class: theme::DATA_EMPTY, "Nothing recorded yet. Submitted entries appear here." }
            }
            ul { class: theme::DATA_LIST,
                for (id, entry) in keyed {
                    EntryCard { key: "{id}", entry }
                }
            }
            if let Some(json) = export.filter(|_| count > 0) {
                details { class: theme::EXPORT_PANEL,
                    summary { "Export as JSON" }
                    pre { "{json}" }
                }
            }
        }
    }
}

#[component]
fn EntryCard(entry: SubmittedEntry) -> Element {
    let prices = entry.prices;
    let show_sold_in = entry.unit == Unit::Tablet;
    let show_tablets = entry.shows_tablets_per_strip();
    let show_strips = entry.shows_strips_per_pack();

    rsx! {
        li { class: theme::DATA_ITEM,
            DataRow { label: FormField::MedicineName.label(), value: entry.medicine_name.clone() }
            DataRow { label: "Description", value: entry.medicine_description.clone() }
            DataRow { label: FormField::BatchNumber.label(), value: entry.batch_number.clone() }
            DataRow { label: FormField::MedicineId.label(), value: entry.medicine_id.clone() }
            DataRow { label: FormField::Unit.label(), value: entry.unit.label().to_string() }
            DataRow { label: FormField::Price.label(), value: format_price(prices.display_price) }
            DataRow { label: "Alternative Price", value: format_price(prices.alternative_price) }
            DataRow { label: "Alternative Price 2", value: format_price(prices.alternative_price2) }
            if show_sold_in {
                DataRow { label: FormField::SoldIn.label(), value: entry.sold_in.label().to_string() }
            }
            if show_tablets {
                DataRow {
                    label: FormField::TabletsPerStrip.label(),
                    value: ratio_text(entry.ratios.tablets_per_strip),
                }
            }
            if show_strips {
                DataRow {
                    label: FormField::StripsPerPack.label(),
                    value: ratio_text(entry.ratios.strips_per_pack),
                }
            }
            DataRow { label: FormField::TotalQuantity.label(), value: entry.total_quantity.to_string() }
        }
    }
}

#[component]
fn DataRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: theme::DATA_ROW,
            strong { "{label}:" }
            " {value}"
        }
    }
}

fn ratio_text(ratio: Option<Decimal>) -> String {
    ratio
        .map(|value| value.normalize().to_string())
        .unwrap_or_else(|| "n/a".to_string())
}
