//! Fixed-locale date formatting
//!
//! The site renders dates in pt-BR regardless of the reader's locale,
//! e.g. "15 mar 2021". Times keep the historical H:m form without zero
//! padding.

use chrono::{DateTime, Datelike, Timelike, Utc};

const MONTHS_PT_BR: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// "dd MMM yyyy" with the pt-BR month abbreviation
pub fn format_date(date: &DateTime<Utc>) -> String {
    let month = MONTHS_PT_BR[date.month0() as usize];
    format!("{:02} {} {}", date.day(), month, date.year())
}

/// "H:m" without zero padding
pub fn format_time(date: &DateTime<Utc>) -> String {
    format!("{}:{}", date.hour(), date.minute())
}
