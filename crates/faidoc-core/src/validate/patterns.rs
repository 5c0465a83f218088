//! Compiled format patterns for field validation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Social Security Number: XXX-XX-XXXX
    pub static ref SSN_FORMAT: Regex = Regex::new(
        r"^\d{3}-\d{2}-\d{4}$"
    ).unwrap();

    // Dollar amount: optional $, digit groups with optional commas,
    // optional decimal with up to two digits. Checked after stripping
    // internal whitespace.
    pub static ref CURRENCY_FORMAT: Regex = Regex::new(
        r"^\$?[\d,]+\.?\d{0,2}$"
    ).unwrap();

    // Plain count: ASCII digits only, no sign or separators.
    pub static ref NUMBER_FORMAT: Regex = Regex::new(
        r"^[0-9]+$"
    ).unwrap();

    // M/D/YYYY or MM/DD/YYYY. Format only; calendar validity is not
    // checked, so 13/40/2024 passes.
    pub static ref DATE_FORMAT: Regex = Regex::new(
        r"^\d{1,2}/\d{1,2}/\d{4}$"
    ).unwrap();

    // local@domain.tld shape: no @ or whitespace in the local part, a dot
    // somewhere in the domain.
    pub static ref EMAIL_FORMAT: Regex = Regex::new(
        r"^[^\s@]+@[^\s@]+\.[^\s@]+$"
    ).unwrap();
}
