//! Plain-text rendering of query results for stdout.

use std::fmt::Write;

use insult_indexer_ingest::StandardQueryResults;
use insult_indexer_shared::SearchResponse;

const SEPARATOR_WIDTH: usize = 80;

/// Render the three result sets in query order, each followed by a separator.
pub fn render_results(results: &StandardQueryResults) -> String {
    let mut out = String::new();

    render_section(
        &mut out,
        &format!("Posts by username {}", results.author),
        &results.by_author,
    );
    render_section(&mut out, "Insults relating to Mother", &results.mentioning_mom);
    render_section(&mut out, "Data tagged as English", &results.english);

    out
}

/// Print the rendered results to stdout.
pub fn print_results(results: &StandardQueryResults) {
    print!("{}", render_results(results));
}

fn render_section(out: &mut String, title: &str, response: &SearchResponse) {
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} ({} of {} shown)",
        title,
        response.len(),
        response.total
    );

    if response.is_empty() {
        let _ = writeln!(out, "  no matches");
    }

    for hit in &response.hits {
        let record = hit.record();
        let _ = writeln!(
            out,
            "  {} [{}] {}",
            hit.key,
            record.createdby.as_deref().unwrap_or("-"),
            record.insult.as_deref().unwrap_or("")
        );
    }

    let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
}
