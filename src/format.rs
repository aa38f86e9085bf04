const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn group_thousands(digits: &str) -> String {
    let chars = digits.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = format!("{}.{}", group_thousands(int_part), frac_part);
    if value < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_currency(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{}", symbol, format_amount(amount.abs()))
    } else {
        format!("{}{}", symbol, format_amount(amount))
    }
}

pub fn currency_symbol_for(code: &str) -> &'static str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CAD" => "C$",
        "AUD" => "A$",
        _ => "₹",
    }
}

pub fn date_only(value: &str) -> &str {
    match value.split_once('T') {
        Some((date, _)) => date,
        None => value,
    }
}

// "2024-06-01" style inputs become "Jun 1, 2024"; anything else passes through
pub fn format_date(value: &str) -> String {
    let date = date_only(value);
    let mut parts = date.splitn(3, '-');
    let year = parts.next().unwrap_or("");
    let month = parts.next().and_then(|m| m.parse::<usize>().ok());
    let day = parts.next().and_then(|d| d.parse::<u32>().ok());
    match (month, day) {
        (Some(month), Some(day)) if (1..=12).contains(&month) => {
            format!("{} {}, {}", MONTH_NAMES[month - 1], day, year)
        }
        _ => value.to_string(),
    }
}

pub fn today() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    date_only(&iso).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_are_grouped_with_two_decimals() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(250.5), "250.50");
        assert_eq!(format_amount(12345.678), "12,345.68");
        assert_eq!(format_amount(1000000.0), "1,000,000.00");
        assert_eq!(format_amount(-1234.5), "-1,234.50");
    }

    #[test]
    fn currency_puts_sign_before_symbol() {
        assert_eq!(format_currency(250.5, "₹"), "₹250.50");
        assert_eq!(format_currency(-99.9, "₹"), "-₹99.90");
        assert_eq!(format_currency(12345.0, "$"), "$12,345.00");
    }

    #[test]
    fn symbols_cover_supported_currencies() {
        assert_eq!(currency_symbol_for("USD"), "$");
        assert_eq!(currency_symbol_for("EUR"), "€");
        assert_eq!(currency_symbol_for("GBP"), "£");
        assert_eq!(currency_symbol_for("INR"), "₹");
        assert_eq!(currency_symbol_for("JPY"), "¥");
        assert_eq!(currency_symbol_for("CAD"), "C$");
        assert_eq!(currency_symbol_for("AUD"), "A$");
        assert_eq!(currency_symbol_for("XYZ"), "₹");
    }

    #[test]
    fn date_only_strips_time_component() {
        assert_eq!(date_only("2024-06-01T12:30:00.000Z"), "2024-06-01");
        assert_eq!(date_only("2024-06-01"), "2024-06-01");
    }

    #[test]
    fn dates_render_in_short_month_form() {
        assert_eq!(format_date("2024-06-01T00:00:00.000Z"), "Jun 1, 2024");
        assert_eq!(format_date("2026-12-25"), "Dec 25, 2026");
        assert_eq!(format_date("2024-01-09"), "Jan 9, 2024");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_date("2024-99-01"), "2024-99-01");
        assert_eq!(format_date(""), "");
    }
}
