use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// DD/MM/YY or DD/MM/YYYY anywhere in the text, with `/`, `-` or `.` as the
// separator. Campaign names carry dates like "06/02/26" or "05-03-2025".
static NAME_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{2})[/\-.](\d{2})[/\-.](\d{2,4})").unwrap());

/// Extract the first date embedded in a campaign name. Two-digit years are
/// taken as 20xx. Impossible day/month combinations yield `None`.
pub fn extract_name_date(name: &str) -> Option<NaiveDate> {
    let caps = NAME_DATE.captures(name)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let mut year: i32 = caps[3].parse().ok()?;
    if year < 100 {
        year += 2000;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Remove the first embedded date from a name. Used when grouping sibling
/// campaigns under a common base name.
pub fn strip_name_date(name: &str) -> String {
    NAME_DATE.replace(name, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_two_digit_year() {
        assert_eq!(
            extract_name_date("Campanha - Al - 05/03/25"),
            NaiveDate::from_ymd_opt(2025, 3, 5)
        );
    }

    #[test]
    fn extracts_four_digit_year_and_other_separators() {
        assert_eq!(
            extract_name_date("Promo 06-02-2026 Eng"),
            NaiveDate::from_ymd_opt(2026, 2, 6)
        );
        assert_eq!(
            extract_name_date("Promo 06.02.26"),
            NaiveDate::from_ymd_opt(2026, 2, 6)
        );
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(
            extract_name_date("01/01/25 até 31/12/25"),
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
    }

    #[test]
    fn no_pattern_means_no_date() {
        assert_eq!(extract_name_date("Campanha sem data"), None);
        assert_eq!(extract_name_date("Meta 2025"), None);
    }

    #[test]
    fn impossible_dates_are_absent() {
        assert_eq!(extract_name_date("Promo 31/02/25"), None);
        assert_eq!(extract_name_date("Promo 10/13/25"), None);
    }

    #[test]
    fn strips_only_the_date() {
        assert_eq!(
            strip_name_date("Promo - Al - 05/03/25"),
            "Promo - Al -"
        );
        assert_eq!(strip_name_date("sem data"), "sem data");
    }
}
