//! Parsing of clinical value strings
//!
//! Observation values arrive as free text often enough that parsing has to
//! be an explicit, non-throwing step: every function here returns `Option`,
//! and the evaluator maps `None` to "condition false".

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a numeric value string. `None` when unparsable.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

/// Parse a "systolic/diastolic" composite as recorded for blood-pressure
/// panels, e.g. "126/76".
pub fn parse_blood_pressure(raw: &str) -> Option<(Decimal, Decimal)> {
    let (systolic, diastolic) = raw.split_once('/')?;
    Some((parse_decimal(systolic)?, parse_decimal(diastolic)?))
}

/// Split a comma-separated parameter list into trimmed, non-empty entries.
pub fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_parsing_trims_and_fails_closed() {
        assert_eq!(parse_decimal(" 7.005 "), Some(Decimal::new(7005, 3)));
        assert_eq!(parse_decimal("210"), Some(Decimal::from(210)));
        assert_eq!(parse_decimal("high"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn blood_pressure_composites() {
        assert_eq!(
            parse_blood_pressure("150/95"),
            Some((Decimal::from(150), Decimal::from(95)))
        );
        assert_eq!(parse_blood_pressure("150"), None);
        assert_eq!(parse_blood_pressure("150/low"), None);
    }

    #[test]
    fn list_splitting_drops_blanks() {
        assert_eq!(
            split_list("atorvastatin, simvastatin,,rosuvastatin "),
            vec!["atorvastatin", "simvastatin", "rosuvastatin"]
        );
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }
}
