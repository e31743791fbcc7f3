use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;

use super::dates::strip_name_date;
use super::record::CampaignRecord;

// Trailing type-suffix token, e.g. "Promo - Al" / "Promo REEL". Sibling
// campaigns differ only by this suffix (and the date).
static TYPE_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[\s\-]*(AL|ALC|ENG|WHATS|REEL|LINK|POST|CARROSSEL|VÍDEO|VIDEO)[\s\-]*$")
        .unwrap()
});

static TRAILING_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\-.]+$").unwrap());

/// Campaign name with the embedded date and any trailing type-suffix token
/// stripped, lower-cased. Sibling variants of one campaign share this.
pub fn base_name(name: &str) -> String {
    let base = strip_name_date(name);
    let base = TYPE_SUFFIX.replace(&base, "").trim().to_string();
    let base = TRAILING_PUNCT.replace(&base, "").trim().to_string();
    base.to_lowercase()
}

/// Sort the record sequence in place: dated records first in chronological
/// order, then by base name so siblings sit together, then by the fixed
/// objective order. The sort is stable.
///
/// A dated record always precedes an undated one; that mirrors the upstream
/// report even where it reads counter-chronological.
pub fn sort_records(records: &mut [CampaignRecord]) {
    records.sort_by(compare);
}

fn compare(a: &CampaignRecord, b: &CampaignRecord) -> Ordering {
    match (a.date, b.date) {
        (Some(da), Some(db)) => {
            let ord = da.cmp(&db);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        (Some(_), None) => return Ordering::Less,
        (None, Some(_)) => return Ordering::Greater,
        (None, None) => {}
    }

    base_name(&a.name)
        .cmp(&base_name(&b.name))
        .then_with(|| a.objective.cmp(&b.objective))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::record::Objective;
    use chrono::NaiveDate;

    fn record(name: &str, objective: Objective, date: Option<NaiveDate>) -> CampaignRecord {
        CampaignRecord {
            id: 0,
            name: name.to_string(),
            display_format: objective.label().to_string(),
            objective,
            validity: "Mensal".into(),
            investment: 0.0,
            amount_spent: 0.0,
            cost_per_result: 0.0,
            reach: 0,
            engagement: 0,
            views: 0,
            clicks: 0,
            date,
        }
    }

    #[test]
    fn base_name_strips_date_suffix_and_punctuation() {
        assert_eq!(base_name("Tem Obra - Carrossel"), "tem obra");
        assert_eq!(base_name("Feira do Centro"), "feira do centro");
        assert_eq!(base_name("Promo - Al - 05/03/25"), "promo");
        assert_eq!(base_name("Promo - REEL"), "promo");
        assert_eq!(base_name("Promo - Vídeo"), "promo");
        assert_eq!(base_name("Campanha 10/10/25 - Eng"), "campanha");
    }

    #[test]
    fn dated_records_precede_undated() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 1);
        let mut records = vec![
            record("Sem data", Objective::Reach, None),
            record("Com data 01/06/25", Objective::Other, d),
        ];
        sort_records(&mut records);
        assert_eq!(records[0].date, d);
    }

    #[test]
    fn dated_records_sort_chronologically() {
        let mut records = vec![
            record("B 02/02/25", Objective::Reach, NaiveDate::from_ymd_opt(2025, 2, 2)),
            record("A 01/01/25", Objective::Reach, NaiveDate::from_ymd_opt(2025, 1, 1)),
        ];
        sort_records(&mut records);
        assert_eq!(records[0].name, "A 01/01/25");
    }

    #[test]
    fn siblings_group_by_base_name_then_objective() {
        let mut records = vec![
            record("Promo - Reel", Objective::Reel, None),
            record("Outra - Eng", Objective::Engagement, None),
            record("Promo - Al", Objective::Reach, None),
            record("Promo - Eng", Objective::Engagement, None),
        ];
        sort_records(&mut records);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Outra - Eng", "Promo - Al", "Promo - Eng", "Promo - Reel"]
        );
    }

    #[test]
    fn objective_breaks_ties_regardless_of_input_order() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 1);
        let mut records = vec![
            record("Promo - Reel - 01/03/25", Objective::Reel, d),
            record("Promo - Al - 01/03/25", Objective::Reach, d),
        ];
        sort_records(&mut records);
        assert_eq!(records[0].objective, Objective::Reach);
    }
}
