//! Terminal display of run results.

use owo_colors::OwoColorize;

use wordsieve_rs::RunSummary;

const PREVIEW_ROWS: usize = 5;

/// Print a short summary of a completed run.
pub fn display_run_summary(summary: &RunSummary) {
    let stats = &summary.statistics;

    println!(
        "{} {} unknown words written to {}",
        "✓".bright_green().bold(),
        stats.ranked_words.to_string().bold(),
        summary.resulting_file.display().to_string().bright_cyan()
    );
    println!(
        "  {} files / {} distinct words read, {} files / {} distinct known words, {} removed",
        stats.unknown_files,
        stats.unknown_words,
        stats.known_files,
        stats.known_words,
        stats.removed_words
    );
    println!(
        "  {}",
        format!(
            "load {:.2?}, filter {:.2?}, rank {:.2?}",
            stats.load_duration, stats.filter_duration, stats.rank_duration
        )
        .dimmed()
    );

    for (i, pair) in summary.top(PREVIEW_ROWS).iter().enumerate() {
        println!("  {}. {} ({})", i + 1, display_word(&pair.word), pair.count);
    }
}

fn display_word(word: &str) -> String {
    if word.is_empty() {
        "<empty>".to_string()
    } else {
        word.to_string()
    }
}
