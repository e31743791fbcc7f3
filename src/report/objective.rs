use super::cost::RowMetrics;
use super::record::Objective;

// Pass A: ordered keyword groups for the explicit optimisation-goal column
// (lower-cased). The column carries either Ads Manager API tokens
// ("post_engagement", "video_thruplay") or localized labels. First matching
// group wins.
const FORMAT_RULES: &[(&[&str], Objective)] = &[
    (&["reach", "alcance", "reconhecimento"], Objective::Reach),
    (&["post_engagement", "engajamento"], Objective::Engagement),
    (
        &[
            "messaging_conversation_started",
            "link_click",
            "omni_landing_page_view",
            "whats",
            "tráfego",
            "trafego",
        ],
        Objective::Link,
    ),
    (&["video_thruplay", "reel"], Objective::Reel),
];

/// Classify one row into an objective.
///
/// `name` must be the upper-cased campaign name and `format` the lower-cased
/// goal-column text (empty when the column is absent). Evaluation order, top
/// to bottom, first match wins:
///
/// 1. the explicit goal column (any group match settles it);
/// 2. strong name tokens, REEL > WHATS > ENG > ALC/AL;
/// 3. weak signals: remaining name tokens and non-zero metric columns.
///
/// Strong name tokens outrank every weak signal, so "...ENG...REEL" is Reel
/// and a row with only a populated reach column is Reach.
pub fn classify(name: &str, format: &str, metrics: &RowMetrics) -> Objective {
    if !format.is_empty() {
        for (keywords, objective) in FORMAT_RULES {
            if keywords.iter().any(|k| format.contains(k)) {
                return *objective;
            }
        }
    }

    if name.contains("REEL") {
        return Objective::Reel;
    }
    if name.contains("WHATS") {
        return Objective::Link;
    }
    if name.contains("ENG") {
        return Objective::Engagement;
    }
    if name.contains("ALC") || name.contains(" AL ") {
        return Objective::Reach;
    }

    if name.contains("VÍDEO") || name.contains("VIDEO") || metrics.views > 0 {
        return Objective::Reel;
    }
    if name.contains("LINK") || metrics.clicks > 0 {
        return Objective::Link;
    }
    if metrics.engagement > 0 {
        return Objective::Engagement;
    }
    if metrics.reach > 0 {
        return Objective::Reach;
    }

    Objective::Other
}

/// Display format extracted from the name's structure: the segment between
/// the first and second hyphen ("Tem Obra - Carrossel - 06/02/26 - Al" →
/// "Carrossel"). Falls back to the objective label when the name has fewer
/// than three hyphen-separated parts.
pub fn display_format(name: &str, objective: Objective) -> String {
    let parts: Vec<&str> = name.split('-').collect();
    if parts.len() >= 3 {
        parts[1].trim().to_string()
    } else {
        objective.label().to_string()
    }
}
