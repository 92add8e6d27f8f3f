use chrono::{Local, NaiveDate};

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Value for the `min` attribute of a date input.
pub fn date_input_value(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).ok()
}

/// Accepts plain dates as well as ISO timestamps such as `2025-01-01T00:00:00.000Z`.
pub fn leading_date(raw: &str) -> Option<NaiveDate> {
    let prefix = raw.trim().get(..10)?;
    parse_date_input(prefix)
}
