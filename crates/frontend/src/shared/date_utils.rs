/// Utilities for date and time formatting
///
/// The backend speaks ISO (`YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS...`), the UI shows DD.MM.YYYY.

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let date = format_date(date_part);
        if date != date_part {
            let time = time_part
                .split(['.', 'Z', '+'])
                .next()
                .unwrap_or(time_part);
            return format!("{} {}", date, time);
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Today in the browser's local time zone, ISO form
pub fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Date part of an ISO value, for comparing a date column with a date filter
pub fn date_part(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}
