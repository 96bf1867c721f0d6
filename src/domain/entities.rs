use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Packaging form a medicine is stocked in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Tube,
    Amp,
    Tablet,
    Bottle,
    Cerep,
    /// Loose strips priced per strip. Not offered in the unit picker.
    Strip,
}

impl Unit {
    /// Units offered in the form's unit picker, in display order.
    pub const SELECTABLE: [Unit; 5] = [Unit::Tube, Unit::Amp, Unit::Tablet, Unit::Bottle, Unit::Cerep];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Tube => "tube",
            Unit::Amp => "amp",
            Unit::Tablet => "tablet",
            Unit::Bottle => "bottle",
            Unit::Cerep => "cerep",
            Unit::Strip => "strip",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Tube => "Tube",
            Unit::Amp => "Amp",
            Unit::Tablet => "Tablet",
            Unit::Bottle => "Bottle",
            Unit::Cerep => "Cerep",
            Unit::Strip => "Strip",
        }
    }

    /// Parse a form value. Blank or unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "tube" => Some(Unit::Tube),
            "amp" => Some(Unit::Amp),
            "tablet" => Some(Unit::Tablet),
            "bottle" => Some(Unit::Bottle),
            "cerep" => Some(Unit::Cerep),
            "strip" => Some(Unit::Strip),
            _ => None,
        }
    }
}

/// Granularity the entered price is denominated in. Only meaningful for tablets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoldIn {
    #[default]
    Pack,
    Strip,
    Tablet,
}

impl SoldIn {
    pub const ALL: [SoldIn; 3] = [SoldIn::Pack, SoldIn::Strip, SoldIn::Tablet];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoldIn::Pack => "pack",
            SoldIn::Strip => "strip",
            SoldIn::Tablet => "tablet",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SoldIn::Pack => "PK",
            SoldIn::Strip => "Strip",
            SoldIn::Tablet => "Tablet",
        }
    }

    /// Parse a form value, accepting the short `pk` spelling for packs.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pack" | "pk" => Some(SoldIn::Pack),
            "strip" => Some(SoldIn::Strip),
            "tablet" => Some(SoldIn::Tablet),
            _ => None,
        }
    }
}

/// Conversion factors between packaging levels. Absent factors count as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagingRatios {
    pub tablets_per_strip: Option<Decimal>,
    pub strips_per_pack: Option<Decimal>,
}

impl PackagingRatios {
    pub fn tablets_per_strip(&self) -> Decimal {
        self.tablets_per_strip.unwrap_or(Decimal::ZERO)
    }

    pub fn strips_per_pack(&self) -> Decimal {
        self.strips_per_pack.unwrap_or(Decimal::ZERO)
    }
}

/// Input to the price conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceEntry {
    pub base_price: Decimal,
    pub unit: Unit,
    pub sold_in: SoldIn,
    pub ratios: PackagingRatios,
}

/// Prices derived from a [`PriceEntry`], each carrying exactly two fractional digits.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub display_price: Decimal,
    pub alternative_price: Decimal,
    pub alternative_price2: Decimal,
}

/// One submitted inventory record as shown in the history list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedEntry {
    pub id: String,
    pub medicine_name: String,
    pub medicine_description: String,
    pub batch_number: String,
    pub medicine_id: String,
    pub unit: Unit,
    pub sold_in: SoldIn,
    pub ratios: PackagingRatios,
    pub total_quantity: u32,
    pub prices: ConversionResult,
}

impl SubmittedEntry {
    /// Ratio rows to display, following what the entry was sold in.
    pub fn shows_strips_per_pack(&self) -> bool {
        match self.unit {
            Unit::Tablet => matches!(self.sold_in, SoldIn::Strip | SoldIn::Tablet),
            Unit::Strip => true,
            _ => false,
        }
    }

    pub fn shows_tablets_per_strip(&self) -> bool {
        self.unit == Unit::Tablet && self.sold_in == SoldIn::Tablet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unit_parse_round_trips_form_values() {
        for unit in Unit::SELECTABLE {
            assert_eq!(Unit::parse(unit.as_str()), Some(unit));
        }
        assert_eq!(Unit::parse("strip"), Some(Unit::Strip));
        assert_eq!(Unit::parse(" Tablet "), Some(Unit::Tablet));
        assert_eq!(Unit::parse(""), None);
        assert_eq!(Unit::parse("capsule"), None);
    }

    #[test]
    fn test_strip_is_not_selectable() {
        assert!(!Unit::SELECTABLE.contains(&Unit::Strip));
    }

    #[test]
    fn test_sold_in_accepts_pk() {
        assert_eq!(SoldIn::parse("pk"), Some(SoldIn::Pack));
        assert_eq!(SoldIn::parse("pack"), Some(SoldIn::Pack));
        assert_eq!(SoldIn::parse("tablet"), Some(SoldIn::Tablet));
        assert_eq!(SoldIn::parse("box"), None);
        assert_eq!(SoldIn::default(), SoldIn::Pack);
    }

    #[test]
    fn test_missing_ratios_count_as_zero() {
        let ratios = PackagingRatios {
            tablets_per_strip: None,
            strips_per_pack: Some(dec!(5)),
        };
        assert_eq!(ratios.tablets_per_strip(), Decimal::ZERO);
        assert_eq!(ratios.strips_per_pack(), dec!(5));
    }

    #[test]
    fn test_ratio_rows_follow_sold_in() {
        let prices = ConversionResult {
            display_price: Decimal::ZERO,
            alternative_price: Decimal::ZERO,
            alternative_price2: Decimal::ZERO,
        };
        let mut entry = SubmittedEntry {
            id: "entry-1".into(),
            medicine_name: "Ibuprofen".into(),
            medicine_description: "200mg".into(),
            batch_number: "B1".into(),
            medicine_id: "MED1".into(),
            unit: Unit::Tablet,
            sold_in: SoldIn::Pack,
            ratios: PackagingRatios::default(),
            total_quantity: 1,
            prices,
        };
        assert!(!entry.shows_strips_per_pack());
        assert!(!entry.shows_tablets_per_strip());

        entry.sold_in = SoldIn::Strip;
        assert!(entry.shows_strips_per_pack());
        assert!(!entry.shows_tablets_per_strip());

        entry.sold_in = SoldIn::Tablet;
        assert!(entry.shows_strips_per_pack());
        assert!(entry.shows_tablets_per_strip());

        entry.unit = Unit::Bottle;
        assert!(!entry.shows_strips_per_pack());
        assert!(!entry.shows_tablets_per_strip());
    }

    #[test]
    fn test_unit_serializes_lowercase() {
        let json = serde_json::to_string(&Unit::Bottle).unwrap();
        assert_eq!(json, "\"bottle\"");
    }
}
