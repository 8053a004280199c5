use wikicount_core::{ReportRowView, ReportView};

const RULE_WIDTH: usize = 75;

pub fn render_header(title: &str, started_at: &str) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    format!(
        "{heavy}\n{title}\nRun started {started_at}\n{heavy}\n{:<4} {:<50} {:>15}\n{light}",
        "#", "Article", "Words"
    )
}

pub fn render_row(row: &ReportRowView) -> String {
    let cell = match row.words {
        Some(words) => format_with_commas(u64::from(words)),
        None => "ERROR".to_string(),
    };
    format!("{:<4} {:<50} {:>15}", row.position, row.title, cell)
}

pub fn render_summary(view: &ReportView) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let tier = view.tier;
    let estimate = match tier.prize() {
        Some(prize) => format!("{} Prize: {}", tier.label(), prize),
        None => tier.label().to_string(),
    };

    format!(
        "{heavy}\n{:<54} {:>15}\n{:<54} {:>15}\n{:<54} {:>15}\n{heavy}\n\nPrize Estimation:\n   {estimate}\n{heavy}",
        "Successful Articles",
        view.tally.successful_count,
        "Failed Articles",
        view.failed_count,
        "TOTAL WORDS",
        format_with_commas(view.tally.total_words),
    )
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use wikicount_core::{PrizeTier, ReportRowView, ReportView, RunTally};

    use super::{format_with_commas, render_header, render_row, render_summary};

    fn row(words: Option<u32>) -> ReportRowView {
        ReportRowView {
            position: 3,
            title: "গেরেরো".to_string(),
            words,
        }
    }

    #[test]
    fn commas_group_thousands() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1_000), "1,000");
        assert_eq!(format_with_commas(1_234_567), "1,234,567");
    }

    #[test]
    fn rows_show_count_or_error() {
        let counted = render_row(&row(Some(12_345)));
        assert!(counted.starts_with("3    গেরেরো"));
        assert!(counted.ends_with("12,345"));

        let failed = render_row(&row(None));
        assert!(failed.ends_with("ERROR"));
    }

    #[test]
    fn header_lists_columns() {
        let header = render_header("Word Count", "2026-01-01T00:00:00+00:00");
        assert!(header.contains("Word Count"));
        assert!(header.contains("2026-01-01T00:00:00+00:00"));
        assert!(header.contains("Article"));
        assert!(header.contains("Words"));
    }

    #[test]
    fn summary_shows_totals_and_tier() {
        let view = ReportView {
            tally: RunTally {
                total_words: 41_000,
                successful_count: 15,
            },
            failed_count: 1,
            tier: PrizeTier::TopThree,
        };
        let summary = render_summary(&view);
        assert!(summary.contains("41,000"));
        assert!(summary.contains("Likely Top 3! Prize: ৬,০০০-১০,০০০ টাকা"));
    }
}
