//! Spanish calendar names and es-AR currency formatting.

use chrono::{Datelike, NaiveDate, Weekday};

/// Capitalized Spanish weekday name, matching the original es-ES display.
pub fn day_name_es(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

/// Capitalized Spanish month name for a 1-12 month number.
pub fn month_name_es(month: u32) -> &'static str {
    match month {
        1 => "Enero",
        2 => "Febrero",
        3 => "Marzo",
        4 => "Abril",
        5 => "Mayo",
        6 => "Junio",
        7 => "Julio",
        8 => "Agosto",
        9 => "Septiembre",
        10 => "Octubre",
        11 => "Noviembre",
        12 => "Diciembre",
        _ => "",
    }
}

/// Formats a peso amount in es-AR style: "$ 1.234,56".
pub fn format_ars(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}$ {grouped},{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_name_es() {
        // 2023-10-31 was a Tuesday
        let date = NaiveDate::from_ymd_opt(2023, 10, 31).unwrap();
        assert_eq!(day_name_es(date), "Martes");

        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(day_name_es(sunday), "Domingo");
    }

    #[test]
    fn test_month_name_es() {
        assert_eq!(month_name_es(1), "Enero");
        assert_eq!(month_name_es(10), "Octubre");
        assert_eq!(month_name_es(12), "Diciembre");
        assert_eq!(month_name_es(13), "");
    }

    #[test]
    fn test_format_ars_grouping() {
        assert_eq!(format_ars(905.5), "$ 905,50");
        assert_eq!(format_ars(1234.56), "$ 1.234,56");
        assert_eq!(format_ars(1234567.891), "$ 1.234.567,89");
        assert_eq!(format_ars(0.0), "$ 0,00");
    }

    #[test]
    fn test_format_ars_negative() {
        assert_eq!(format_ars(-42.1), "-$ 42,10");
    }
}
