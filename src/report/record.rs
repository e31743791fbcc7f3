use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Campaign optimisation goal. Declaration order is the tie-break order used
/// by the final sort: Reach < Engagement < Link < Reel < Other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Objective {
    Reach,
    Engagement,
    Link,
    Reel,
    Other,
}

impl Objective {
    /// Report label, matching the Ads Manager export language.
    pub fn label(self) -> &'static str {
        match self {
            Objective::Reach => "Alcance",
            Objective::Engagement => "Engajamento",
            Objective::Link => "Link",
            Objective::Reel => "Reel",
            Objective::Other => "Outro",
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One normalized campaign row. Built once per valid input row and never
/// mutated after sorting.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignRecord {
    /// Per-run row counter. Only a list key for consumers; excluded from
    /// equality.
    pub id: u64,
    pub name: String,
    /// Second hyphen-separated segment of the name ("Carrossel", "Post"...),
    /// or the objective label when the name has no such segment.
    pub display_format: String,
    pub objective: Objective,
    pub validity: String,
    pub investment: f64,
    pub amount_spent: f64,
    pub cost_per_result: f64,
    pub reach: u64,
    pub engagement: u64,
    pub views: u64,
    pub clicks: u64,
    /// Date embedded in the campaign name, when one is present.
    pub date: Option<NaiveDate>,
}

impl PartialEq for CampaignRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.display_format == other.display_format
            && self.objective == other.objective
            && self.validity == other.validity
            && self.investment == other.investment
            && self.amount_spent == other.amount_spent
            && self.cost_per_result == other.cost_per_result
            && self.reach == other.reach
            && self.engagement == other.engagement
            && self.views == other.views
            && self.clicks == other.clicks
            && self.date == other.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64) -> CampaignRecord {
        CampaignRecord {
            id,
            name: "Promo - Post - 01/01/25 - Eng".into(),
            display_format: "Post".into(),
            objective: Objective::Engagement,
            validity: "Mensal".into(),
            investment: 100.0,
            amount_spent: 80.0,
            cost_per_result: 0.5,
            reach: 0,
            engagement: 160,
            views: 0,
            clicks: 0,
            date: NaiveDate::from_ymd_opt(2025, 1, 1),
        }
    }

    #[test]
    fn equality_ignores_id() {
        assert_eq!(record(1), record(2));
    }

    #[test]
    fn objective_order_is_tie_break_order() {
        assert!(Objective::Reach < Objective::Engagement);
        assert!(Objective::Engagement < Objective::Link);
        assert!(Objective::Link < Objective::Reel);
        assert!(Objective::Reel < Objective::Other);
    }

    #[test]
    fn labels_match_export_language() {
        assert_eq!(Objective::Reach.to_string(), "Alcance");
        assert_eq!(Objective::Other.to_string(), "Outro");
    }
}
