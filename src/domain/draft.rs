use std::fmt;

use thiserror::Error;
use tracing::debug;

use super::entities::{PriceEntry, SoldIn, SubmittedEntry, Unit};
use super::pricing::{convert, parse_quantity};
use crate::util::{generate_entry_id, generate_medicine_id};

/// Inputs of the entry form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    MedicineName,
    MedicineDescription,
    BatchNumber,
    MedicineId,
    Unit,
    Price,
    SoldIn,
    TabletsPerStrip,
    StripsPerPack,
    TotalQuantity,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::MedicineName => "Medicine Name",
            FormField::MedicineDescription => "Medicine Description",
            FormField::BatchNumber => "Batch Number",
            FormField::MedicineId => "Medicine ID",
            FormField::Unit => "Unit",
            FormField::Price => "Price",
            FormField::SoldIn => "Sold In",
            FormField::TabletsPerStrip => "Tablets per Strip",
            FormField::StripsPerPack => "Strips per PK",
            FormField::TotalQuantity => "Total Quantity",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntryError {
    #[error("missing required fields: {}", join_labels(.0))]
    MissingFields(Vec<FormField>),
}

fn join_labels(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(FormField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Editable state of the entry form. Values are kept exactly as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryDraft {
    pub medicine_name: String,
    pub medicine_description: String,
    pub batch_number: String,
    pub medicine_id: String,
    pub unit: Option<Unit>,
    pub price: String,
    pub sold_in: SoldIn,
    pub tablets_per_strip: String,
    pub strips_per_pack: String,
    pub total_quantity: String,
}

impl Default for EntryDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryDraft {
    pub fn new() -> Self {
        Self {
            medicine_name: String::new(),
            medicine_description: String::new(),
            batch_number: String::new(),
            medicine_id: generate_medicine_id(),
            unit: None,
            price: String::new(),
            sold_in: SoldIn::default(),
            tablets_per_strip: String::new(),
            strips_per_pack: String::new(),
            total_quantity: String::new(),
        }
    }

    /// Select a unit. Moving to tablets or cereps clears the price; any unit other than
    /// tablets drops the ratios.
    pub fn set_unit(&mut self, unit: Option<Unit>) {
        if matches!(unit, Some(Unit::Tablet | Unit::Cerep)) {
            self.price.clear();
        }
        if unit != Some(Unit::Tablet) {
            self.tablets_per_strip.clear();
            self.strips_per_pack.clear();
        }
        self.unit = unit;
    }

    pub fn is_visible(&self, field: FormField) -> bool {
        match field {
            FormField::Price => matches!(self.unit, Some(unit) if unit != Unit::Cerep),
            FormField::SoldIn => self.unit == Some(Unit::Tablet),
            FormField::StripsPerPack => match self.unit {
                Some(Unit::Tablet) => matches!(self.sold_in, SoldIn::Strip | SoldIn::Tablet),
                Some(Unit::Strip) => true,
                _ => false,
            },
            FormField::TabletsPerStrip => {
                self.unit == Some(Unit::Tablet) && self.sold_in == SoldIn::Tablet
            }
            _ => true,
        }
    }

    fn raw_value(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::MedicineName => Some(self.medicine_name.as_str()),
            FormField::MedicineDescription => Some(self.medicine_description.as_str()),
            FormField::BatchNumber => Some(self.batch_number.as_str()),
            FormField::MedicineId => Some(self.medicine_id.as_str()),
            FormField::Unit => self.unit.map(|unit| unit.as_str()),
            FormField::Price => Some(self.price.as_str()),
            FormField::SoldIn => Some(self.sold_in.as_str()),
            FormField::TabletsPerStrip => Some(self.tablets_per_strip.as_str()),
            FormField::StripsPerPack => Some(self.strips_per_pack.as_str()),
            FormField::TotalQuantity => Some(self.total_quantity.as_str()),
        }
    }

    /// Every visible field that is still blank.
    pub fn missing_fields(&self) -> Vec<FormField> {
        const REQUIRED: [FormField; 8] = [
            FormField::MedicineName,
            FormField::MedicineDescription,
            FormField::BatchNumber,
            FormField::Unit,
            FormField::Price,
            FormField::TabletsPerStrip,
            FormField::StripsPerPack,
            FormField::TotalQuantity,
        ];

        REQUIRED
            .into_iter()
            .filter(|field| self.is_visible(*field))
            .filter(|field| {
                self.raw_value(*field)
                    .map(|value| value.trim().is_empty())
                    .unwrap_or(true)
            })
            .collect()
    }

    pub fn validate(&self) -> Result<Unit, EntryError> {
        let missing = self.missing_fields();
        match self.unit {
            Some(unit) if missing.is_empty() => Ok(unit),
            _ => Err(EntryError::MissingFields(missing)),
        }
    }

    /// Turn the draft into a record and reset the form. A rejected draft is left untouched.
    pub fn submit(&mut self) -> Result<SubmittedEntry, EntryError> {
        let unit = self.validate()?;

        let price_entry = PriceEntry::from_form(
            &self.price,
            unit,
            self.sold_in,
            &self.tablets_per_strip,
            &self.strips_per_pack,
        );
        let prices = convert(&price_entry);

        let entry = SubmittedEntry {
            id: generate_entry_id(),
            medicine_name: self.medicine_name.trim().to_string(),
            medicine_description: self.medicine_description.trim().to_string(),
            batch_number: self.batch_number.trim().to_string(),
            medicine_id: self.medicine_id.clone(),
            unit,
            sold_in: self.sold_in,
            ratios: price_entry.ratios,
            total_quantity: parse_quantity(&self.total_quantity),
            prices,
        };

        debug!(medicine_id = %entry.medicine_id, "entry draft submitted; resetting form");
        *self = Self::new();
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn filled_tablet_draft() -> EntryDraft {
        let mut draft = EntryDraft::new();
        draft.medicine_name = "Paracetamol".into();
        draft.medicine_description = "500mg analgesic".into();
        draft.batch_number = "B-2291".into();
        draft.set_unit(Some(Unit::Tablet));
        draft.price = "10".into();
        draft.sold_in = SoldIn::Tablet;
        draft.tablets_per_strip = "10".into();
        draft.strips_per_pack = "5".into();
        draft.total_quantity = "40".into();
        draft
    }

    #[test]
    fn test_new_draft_has_medicine_id() {
        let draft = EntryDraft::new();
        assert!(draft.medicine_id.starts_with("MED"));
        assert!(draft.medicine_id[3..].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(draft.sold_in, SoldIn::Pack);
        assert_eq!(draft.unit, None);
    }

    #[test]
    fn test_switching_to_tablet_clears_price() {
        let mut draft = EntryDraft::new();
        draft.set_unit(Some(Unit::Bottle));
        draft.price = "4.50".into();
        draft.set_unit(Some(Unit::Tablet));
        assert!(draft.price.is_empty());
    }

    #[test]
    fn test_switching_away_from_tablet_clears_ratios() {
        let mut draft = filled_tablet_draft();
        draft.set_unit(Some(Unit::Tube));
        assert!(draft.tablets_per_strip.is_empty());
        assert!(draft.strips_per_pack.is_empty());
        assert_eq!(draft.price, "10");
    }

    #[test]
    fn test_field_visibility_follows_sold_in() {
        let mut draft = EntryDraft::new();
        assert!(!draft.is_visible(FormField::Price));

        draft.set_unit(Some(Unit::Tablet));
        assert!(draft.is_visible(FormField::Price));
        assert!(draft.is_visible(FormField::SoldIn));
        assert!(!draft.is_visible(FormField::StripsPerPack));

        draft.sold_in = SoldIn::Strip;
        assert!(draft.is_visible(FormField::StripsPerPack));
        assert!(!draft.is_visible(FormField::TabletsPerStrip));

        draft.sold_in = SoldIn::Tablet;
        assert!(draft.is_visible(FormField::TabletsPerStrip));

        draft.set_unit(Some(Unit::Amp));
        assert!(!draft.is_visible(FormField::SoldIn));
        assert!(!draft.is_visible(FormField::StripsPerPack));
    }

    #[test]
    fn test_cerep_has_no_price_input() {
        let mut draft = filled_tablet_draft();
        draft.set_unit(Some(Unit::Bottle));
        assert!(draft.is_visible(FormField::Price));
        draft.price = "7.25".into();

        draft.set_unit(Some(Unit::Cerep));
        assert!(!draft.is_visible(FormField::Price));
        assert!(draft.price.is_empty());
        assert!(draft.missing_fields().is_empty());

        let entry = draft.submit().unwrap();
        assert_eq!(entry.unit, Unit::Cerep);
        assert_eq!(entry.prices.display_price.to_string(), "0.00");
        assert_eq!(entry.prices.alternative_price.to_string(), "0.00");
    }

    #[test]
    fn test_blank_draft_reports_all_missing_fields() {
        let draft = EntryDraft::new();
        assert_eq!(
            draft.missing_fields(),
            vec![
                FormField::MedicineName,
                FormField::MedicineDescription,
                FormField::BatchNumber,
                FormField::Unit,
                FormField::TotalQuantity,
            ]
        );
    }

    #[test]
    fn test_hidden_ratios_are_not_required() {
        let mut draft = filled_tablet_draft();
        draft.sold_in = SoldIn::Pack;
        draft.tablets_per_strip.clear();
        draft.strips_per_pack.clear();
        assert!(draft.missing_fields().is_empty());
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let mut draft = filled_tablet_draft();
        draft.batch_number = "   ".into();
        assert_eq!(draft.missing_fields(), vec![FormField::BatchNumber]);
    }

    #[test]
    fn test_failed_submit_keeps_draft() {
        let mut draft = filled_tablet_draft();
        draft.strips_per_pack.clear();
        let before = draft.clone();
        let err = draft.submit().unwrap_err();
        assert_eq!(err, EntryError::MissingFields(vec![FormField::StripsPerPack]));
        assert_eq!(err.to_string(), "missing required fields: Strips per PK");
        assert_eq!(draft, before);
    }

    #[test]
    fn test_submit_computes_prices_and_resets() {
        let mut draft = filled_tablet_draft();
        let medicine_id = draft.medicine_id.clone();
        let entry = draft.submit().unwrap();

        assert_eq!(entry.medicine_name, "Paracetamol");
        assert_eq!(entry.medicine_id, medicine_id);
        assert_eq!(entry.unit, Unit::Tablet);
        assert_eq!(entry.total_quantity, 40);
        assert_eq!(entry.ratios.strips_per_pack, Some(dec!(5)));
        assert_eq!(entry.prices.display_price.to_string(), "10.00");
        assert_eq!(entry.prices.alternative_price.to_string(), "500.00");
        assert_eq!(entry.prices.alternative_price2.to_string(), "50.00");

        assert!(draft.medicine_name.is_empty());
        assert_eq!(draft.unit, None);
        assert_eq!(draft.sold_in, SoldIn::Pack);
        assert!(draft.medicine_id.starts_with("MED"));
    }

    #[test]
    fn test_non_numeric_values_submit_as_zero() {
        let mut draft = filled_tablet_draft();
        draft.set_unit(Some(Unit::Bottle));
        draft.price = "free".into();
        draft.total_quantity = "a dozen".into();
        let entry = draft.submit().unwrap();
        assert_eq!(entry.prices.display_price.to_string(), "0.00");
        assert_eq!(entry.total_quantity, 0);
    }
}
