use crate::grid::Cell;

// Keyword families per logical field. Each lists the Ads Manager native
// (English/API) names first, then the pt-BR localized headers, since exports
// arrive in either. Matching is lower-cased substring containment.
const NAME_KEYWORDS: &[&str] = &["campaign name", "nome da campanha", "nome da ação"];
const FORMAT_KEYWORDS: &[&str] = &["format", "formato"];
const BUDGET_KEYWORDS: &[&str] = &["budget", "orçamento", "investimento"];
const SPENT_KEYWORDS: &[&str] = &["amount spent", "valor usado", "valor gasto"];

const REACH_KEYWORDS: &[&str] = &["reach", "alcance"];
const IMPRESSIONS_KEYWORDS: &[&str] = &["impressions", "impressões"];
const ENGAGEMENT_KEYWORDS: &[&str] = &["post_engagement", "engajamento", "post engagement"];
const LINK_CLICKS_KEYWORDS: &[&str] = &["link_click", "cliques no link", "direcionamento"];
const THRUPLAY_KEYWORDS: &[&str] = &["thruplay", "visualizações", "plays", "visualização"];
const RESULTS_KEYWORDS: &[&str] = &["results", "resultados", "result"];

const COST_PER_RESULT_KEYWORDS: &[&str] = &[
    "cost per result",
    "custo por resultado",
    "custo por resultados",
];
const CPM_KEYWORDS: &[&str] = &[
    "cpm",
    "custo por 1.000",
    "custo por 1.000 impressões",
    "custo por 1.000 pessoas",
];
const CPE_KEYWORDS: &[&str] = &[
    "cost per post engagement",
    "custo por engajamento",
    "custo por interação",
];
const CPL_KEYWORDS: &[&str] = &["cost per link click", "custo por clique"];
const CPV_KEYWORDS: &[&str] = &["cost per thruplay", "custo por thruplay"];

/// Resolved column positions for one export variant. `None` means the export
/// simply does not carry that column; downstream reads degrade to zero.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    pub name: Option<usize>,
    pub format: Option<usize>,
    pub budget: Option<usize>,
    pub spent: Option<usize>,
    pub reach: Option<usize>,
    pub impressions: Option<usize>,
    pub engagement: Option<usize>,
    pub link_clicks: Option<usize>,
    pub thruplay: Option<usize>,
    pub results: Option<usize>,
    pub cost_per_result: Option<usize>,
    pub cpm: Option<usize>,
    pub cpe: Option<usize>,
    pub cpl: Option<usize>,
    pub cpv: Option<usize>,
}

impl ColumnMap {
    /// Resolve every logical field against a header row. The first header
    /// (by column order) containing any of a field's keywords wins.
    pub fn resolve(header_row: &[Cell]) -> Self {
        let headers: Vec<String> = header_row.iter().map(normalize_header).collect();
        let find = |keywords: &[&str]| {
            headers
                .iter()
                .position(|h| keywords.iter().any(|k| h.contains(k)))
        };

        ColumnMap {
            name: find(NAME_KEYWORDS),
            format: find(FORMAT_KEYWORDS),
            budget: find(BUDGET_KEYWORDS),
            spent: find(SPENT_KEYWORDS),
            reach: find(REACH_KEYWORDS),
            impressions: find(IMPRESSIONS_KEYWORDS),
            engagement: find(ENGAGEMENT_KEYWORDS),
            link_clicks: find(LINK_CLICKS_KEYWORDS),
            thruplay: find(THRUPLAY_KEYWORDS),
            results: find(RESULTS_KEYWORDS),
            cost_per_result: find(COST_PER_RESULT_KEYWORDS),
            cpm: find(CPM_KEYWORDS),
            cpe: find(CPE_KEYWORDS),
            cpl: find(CPL_KEYWORDS),
            cpv: find(CPV_KEYWORDS),
        }
    }
}

fn normalize_header(cell: &Cell) -> String {
    match cell {
        Cell::Text(t) => t.trim().to_lowercase().replace('"', ""),
        Cell::Number(n) => n.to_string(),
        Cell::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<Cell> {
        names.iter().map(|n| Cell::Text(n.to_string())).collect()
    }

    #[test]
    fn resolves_english_export_headers() {
        let cols = ColumnMap::resolve(&header(&[
            "Campaign name",
            "Amount spent",
            "Reach",
            "Impressions",
            "Cost per result",
        ]));
        assert_eq!(cols.name, Some(0));
        assert_eq!(cols.spent, Some(1));
        assert_eq!(cols.reach, Some(2));
        assert_eq!(cols.impressions, Some(3));
        assert_eq!(cols.cost_per_result, Some(4));
        assert_eq!(cols.cpm, None);
    }

    #[test]
    fn resolves_localized_export_headers() {
        let cols = ColumnMap::resolve(&header(&[
            "Nome da campanha",
            "Valor gasto (BRL)",
            "Alcance",
            "Custo por 1.000 pessoas alcançadas",
            "Engajamento com a publicação",
        ]));
        assert_eq!(cols.name, Some(0));
        assert_eq!(cols.spent, Some(1));
        assert_eq!(cols.reach, Some(2));
        assert_eq!(cols.cpm, Some(3));
        assert_eq!(cols.engagement, Some(4));
    }

    #[test]
    fn first_matching_header_wins_by_column_order() {
        // Both headers contain a reach keyword; the earlier column wins even
        // though the later one matches an earlier keyword in the family.
        let cols = ColumnMap::resolve(&header(&["Alcance da campanha", "Reach"]));
        assert_eq!(cols.reach, Some(0));
    }

    #[test]
    fn headers_are_case_insensitive_and_unquoted() {
        let cols = ColumnMap::resolve(&header(&["\"CAMPAIGN NAME\""]));
        assert_eq!(cols.name, Some(0));
    }

    #[test]
    fn non_text_headers_resolve_nothing() {
        let cols = ColumnMap::resolve(&[Cell::Number(3.0), Cell::Empty]);
        assert_eq!(cols.name, None);
        assert_eq!(cols.results, None);
    }
}
