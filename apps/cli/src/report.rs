//! Rendering of match results for the terminal.

use quiz_core::{MatchResult, MatchStatistics, MatchStatus, Question};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;

/// JSON body for `--format json`.
#[derive(Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<&'a [MatchResult]>,
    statistics: &'a MatchStatistics,
}

/// Sections in display order.
const SECTIONS: [(MatchStatus, &str); 4] = [
    (MatchStatus::SingleMatch, "مطابقة واحدة"),
    (MatchStatus::MultipleMatches, "مطابقات متعددة"),
    (MatchStatus::NeedsReview, "بحاجة لمراجعة"),
    (MatchStatus::NoMatch, "بلا مطابقات"),
];

/// Render results grouped by status, followed by the statistics.
pub fn render_results(
    results: &[MatchResult],
    statistics: &MatchStatistics,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(Some(results), statistics),
        OutputFormat::Text => {
            let mut lines = Vec::new();
            for (status, title) in SECTIONS {
                let section: Vec<(usize, &MatchResult)> = results
                    .iter()
                    .enumerate()
                    .filter(|(_, r)| r.match_status == status)
                    .collect();

                lines.push(format!("## {title} ({})", section.len()));
                for (index, result) in section {
                    push_result(&mut lines, index, result);
                }
                lines.push(String::new());
            }
            lines.push(statistics_text(statistics));
            Ok(lines.join("\n"))
        }
    }
}

/// Render only the statistics.
pub fn render_statistics(statistics: &MatchStatistics, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(None, statistics),
        OutputFormat::Text => Ok(statistics_text(statistics)),
    }
}

/// Side-by-side view used when asking a reviewer to decide.
pub fn review_prompt_text(candidate: &Question, review: &Question) -> String {
    let mut lines = vec!["السؤال من المجموعة الأولى:".to_string()];
    push_question(&mut lines, candidate, "  ");
    lines.push("السؤال المشابه من المجموعة الثانية:".to_string());
    push_question(&mut lines, review, "  ");
    lines.join("\n")
}

fn to_json(results: Option<&[MatchResult]>, statistics: &MatchStatistics) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Report {
        results,
        statistics,
    })?)
}

fn push_result(lines: &mut Vec<String>, index: usize, result: &MatchResult) {
    lines.push(format!("[{index}] {}", result.question1.text));
    for opt in &result.question1.options {
        lines.push(option_line(&opt.text, opt.is_correct, "    "));
    }
    if let Some(matched) = &result.question2 {
        lines.push(format!("    => {}", matched.text));
    }
    if !result.match_details.is_empty() {
        lines.push(format!("    ({})", result.match_details));
    }
}

fn push_question(lines: &mut Vec<String>, question: &Question, indent: &str) {
    lines.push(format!("{indent}{}", question.text));
    for opt in &question.options {
        lines.push(option_line(&opt.text, opt.is_correct, &format!("{indent}  ")));
    }
}

fn option_line(text: &str, is_correct: bool, indent: &str) -> String {
    if is_correct {
        format!("{indent}- {text} ✓")
    } else {
        format!("{indent}- {text}")
    }
}

fn statistics_text(stats: &MatchStatistics) -> String {
    [
        "## إحصائيات المطابقة".to_string(),
        format!("إجمالي الأسئلة في المجموعة ١: {}", stats.total_questions1),
        format!("إجمالي الأسئلة في المجموعة ٢ (المرجعية): {}", stats.total_questions2),
        format!("نسبة المطابقة: {:.2}%", stats.match_percentage),
        format!("أسئلة بمطابقة واحدة: {}", stats.single_match_count),
        format!("أسئلة بمطابقات متعددة: {}", stats.multiple_match_count),
        format!("أسئلة بحاجة لمراجعة: {}", stats.needs_review_count),
        format!("أسئلة بلا مطابقات: {}", stats.no_match_count),
    ]
    .join("\n")
}
