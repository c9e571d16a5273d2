use colored::Colorize;

use crate::domain::DisplayDocument;
use crate::rank::Mmr;
use crate::signatures::SignatureSummary;

pub const BANNER_WIDTH: usize = 55;

pub fn banner(title: &str) {
    let rule = "=".repeat(BANNER_WIDTH);
    println!();
    println!("{}", rule);
    println!("  {}", title.bold());
    println!("{}", rule);
}

pub fn rule() {
    println!("{}", "=".repeat(BANNER_WIDTH));
}

/// Signed distance to a milestone, e.g. `+12` or `-3`
pub fn milestone_delta(mmr: Mmr, milestone: Mmr) -> String {
    format!("{:+}", mmr.saturating_sub(milestone))
}

pub fn print_rating(document: &DisplayDocument) {
    let rating = &document.current_rating;
    let delta = milestone_delta(rating.mmr, document.rank_thresholds.gc1);
    let delta = if rating.mmr >= document.rank_thresholds.gc1 {
        delta.green()
    } else {
        delta.yellow()
    };

    println!();
    println!("  {} {}", rating.rank.bold(), rating.division);
    println!("  MMR: {} ({} from GC1)", rating.mmr.to_string().cyan(), delta);
}

pub fn print_signatures(summary: &SignatureSummary, output_name: &str, preview: usize) {
    println!();
    rule();
    println!("{} Total signatures:    {}", "[OK]".green(), summary.total_signatures);
    println!("{} Approved to display: {}", "[OK]".green(), summary.approved_signatures);
    println!("{} Output written to:   {}", "[OK]".green(), output_name);
    rule();

    if summary.entries.is_empty() {
        return;
    }

    println!();
    println!("Preview of approved names:");
    for name in summary.entries.iter().take(preview) {
        println!("  - {}", name);
    }
    if summary.entries.len() > preview {
        println!("  ... and {} more", summary.entries.len() - preview);
    }
}
