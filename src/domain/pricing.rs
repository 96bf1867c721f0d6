//! Price conversion between packaging levels.
//!
//! Everything here is total: unparsable numbers fall back to zero instead of
//! producing errors, so a half-filled form still yields a record.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use super::entities::{ConversionResult, PackagingRatios, PriceEntry, SoldIn, Unit};

/// Fractional digits carried by every displayed price.
pub const PRICE_SCALE: u32 = 2;

impl PriceEntry {
    /// Build an entry from raw form text, applying the zero fallbacks.
    pub fn from_form(
        price: &str,
        unit: Unit,
        sold_in: SoldIn,
        tablets_per_strip: &str,
        strips_per_pack: &str,
    ) -> Self {
        Self {
            base_price: parse_amount(price),
            unit,
            sold_in,
            ratios: PackagingRatios {
                tablets_per_strip: parse_ratio(tablets_per_strip),
                strips_per_pack: parse_ratio(strips_per_pack),
            },
        }
    }
}

/// Derive the alternate prices for an entry.
///
/// | unit   | sold in | alternative price             | alternative price 2   |
/// |--------|---------|-------------------------------|-----------------------|
/// | tablet | pack    | 0                             | 0                     |
/// | tablet | strip   | price × strips/pack           | 0                     |
/// | tablet | tablet  | price × tablets/strip × strips/pack | price × strips/pack |
/// | strip  | any     | price × strips/pack           | 0                     |
/// | other  | any     | 0                             | 0                     |
pub fn convert(entry: &PriceEntry) -> ConversionResult {
    let price = entry.base_price.max(Decimal::ZERO);
    let strips_per_pack = entry.ratios.strips_per_pack();
    let tablets_per_strip = entry.ratios.tablets_per_strip();

    let (alternative, alternative2) = match (entry.unit, entry.sold_in) {
        (Unit::Tablet, SoldIn::Pack) => (Decimal::ZERO, Decimal::ZERO),
        (Unit::Tablet, SoldIn::Strip) | (Unit::Strip, _) => {
            (product(&[price, strips_per_pack]), Decimal::ZERO)
        }
        (Unit::Tablet, SoldIn::Tablet) => (
            product(&[price, tablets_per_strip, strips_per_pack]),
            product(&[price, strips_per_pack]),
        ),
        _ => (Decimal::ZERO, Decimal::ZERO),
    };

    ConversionResult {
        display_price: to_price_scale(price),
        alternative_price: to_price_scale(alternative),
        alternative_price2: to_price_scale(alternative2),
    }
}

fn product(factors: &[Decimal]) -> Decimal {
    factors
        .iter()
        .try_fold(Decimal::ONE, |acc, factor| acc.checked_mul(*factor))
        .unwrap_or_else(|| {
            warn!(?factors, "price conversion overflowed; falling back to zero");
            Decimal::ZERO
        })
}

/// Round half away from zero and pin the scale so the value always prints two decimals.
/// Values too large to carry two fractional digits fall back to zero.
pub fn to_price_scale(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PRICE_SCALE);
    if rounded.scale() == PRICE_SCALE {
        return rounded;
    }

    warn!(%value, "price exceeds the representable range at two decimals; falling back to zero");
    let mut zero = Decimal::ZERO;
    zero.rescale(PRICE_SCALE);
    zero
}

pub fn format_price(value: Decimal) -> String {
    to_price_scale(value).to_string()
}

/// Parse a price. Blank, non-numeric and negative input all become zero.
pub fn parse_amount(input: &str) -> Decimal {
    leading_number(input)
        .filter(|value| !value.is_sign_negative())
        .unwrap_or(Decimal::ZERO)
}

/// Parse a packaging ratio. Only strictly positive values count.
pub fn parse_ratio(input: &str) -> Option<Decimal> {
    leading_number(input).filter(|value| *value > Decimal::ZERO)
}

/// Parse a stock count from its leading digits, zero when there are none.
pub fn parse_quantity(input: &str) -> u32 {
    let trimmed = input.trim();
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    trimmed[..digits].parse().unwrap_or(0)
}

/// Read the longest numeric prefix (`[+-]digits[.digits][e[+-]digits]`) the way a browser float
/// parse does, so `"12.5 mg"` reads as 12.5 and `"1e3"` as 1000.
fn leading_number(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let (int_part, after) = rest.split_at(int_len);
    let (frac_part, after) = match after.strip_prefix('.') {
        Some(frac) => frac.split_at(frac.bytes().take_while(u8::is_ascii_digit).count()),
        None => ("", after),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let mantissa = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{frac_part}")
    };

    let value = match exponent(after) {
        Some(exp) => Decimal::from_scientific(&format!("{mantissa}e{exp}")).ok()?,
        None => Decimal::from_str(&mantissa).ok()?,
    };
    Some(if negative { -value } else { value })
}

/// Exponent suffix (`e[+-]digits`) at the start of `input`, without a leading `+`.
/// A dangling `e` with no digits is not an exponent.
fn exponent(input: &str) -> Option<String> {
    let rest = input.strip_prefix(['e', 'E'])?;
    let (sign, digits) = match rest.as_bytes().first() {
        Some(b'-') => ("-", &rest[1..]),
        Some(b'+') => ("", &rest[1..]),
        _ => ("", rest),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    Some(format!("{sign}{}", &digits[..len]))
}
