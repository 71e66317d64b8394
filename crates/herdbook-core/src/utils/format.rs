/// Format a date string to a more readable format
pub fn format_date(date: &str) -> String {
    // Try to parse ISO format and convert to readable
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(date) {
        dt.format("%b %d, %Y").to_string()
    } else if let Ok(day) = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        day.format("%b %d, %Y").to_string()
    } else if date.len() >= 10 {
        date.chars().take(10).collect()
    } else {
        date.to_string()
    }
}

/// Turn an API enum value like `foot_rot` into `Foot Rot`
pub fn humanize(value: &str) -> String {
    value
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// "Yes (detail)" / "Yes" / "No" for a flag with an optional detail
pub fn yes_no(flag: bool, detail: Option<&str>) -> String {
    match (flag, detail.filter(|d| !d.is_empty())) {
        (true, Some(detail)) => format!("Yes ({})", detail),
        (true, None) => "Yes".to_string(),
        (false, _) => "No".to_string(),
    }
}
