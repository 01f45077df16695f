//! Human-readable summary printed after each command.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{BurndownSummary, CommandResult, InitSummary};
use crate::core::{DONE_MARK, Phase};

/// Width of the phase key column in the summary.
const KEY_WIDTH: usize = 40;

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match result {
        CommandResult::Burndown(summary) => print_burndown(summary, writer),
        CommandResult::Init(summary) => print_init(summary, writer),
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

fn print_burndown<W: Write>(summary: &BurndownSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        DONE_MARK.green(),
        format!(
            "Scanned {} in {} ({} done)",
            plural(summary.file_count, "file"),
            summary.source_root.display(),
            summary.done_count
        )
        .green()
    );

    for phase in Phase::ALL {
        let count = summary.counts.get(phase);
        let padded = format!("{:>4}", count);
        let count_str = if count == 0 {
            padded.green()
        } else {
            padded.yellow()
        };
        let _ = writeln!(
            writer,
            "  {:<width$} {} pending",
            phase.key(),
            count_str,
            width = KEY_WIDTH
        );
    }

    match &summary.reviews {
        Some(reviews) => {
            let _ = writeln!(
                writer,
                "  {} resolved by open reviews ({} checked)",
                plural(reviews.resolved, "marker"),
                plural(reviews.changes, "change")
            );
            if reviews.unmatched > 0 {
                let _ = writeln!(
                    writer,
                    "  {} {} ignored (unknown file or phase)",
                    "note:".bold(),
                    plural(reviews.unmatched, "removal")
                );
            }
        }
        None => {
            let _ = writeln!(writer, "  {}", "review service skipped".dimmed());
        }
    }

    let _ = writeln!(
        writer,
        "  {} {}, {}, {}",
        "wrote".dimmed(),
        summary.paths.csv.display(),
        summary.paths.json.display(),
        summary.paths.table.display()
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        DONE_MARK.green(),
        format!("Created {}", summary.config_path.display()).green()
    );
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::{
        cli::commands::ReviewSummary, core::PendingCounts, output::ReportPaths,
    };

    fn render(result: &CommandResult) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_to(result, &mut out);
        String::from_utf8(out).unwrap()
    }

    fn summary(reviews: Option<ReviewSummary>) -> BurndownSummary {
        BurndownSummary {
            source_root: PathBuf::from("nova/nova/conf"),
            file_count: 3,
            done_count: 1,
            counts: PendingCounts([2, 0, 1, 0, 0]),
            reviews,
            paths: ReportPaths::in_dir(Path::new("out")),
        }
    }

    #[test]
    fn test_print_burndown_with_reviews() {
        let out = render(&CommandResult::Burndown(summary(Some(ReviewSummary {
            changes: 4,
            resolved: 1,
            unmatched: 2,
        }))));

        assert!(out.contains("Scanned 3 files in nova/nova/conf (1 done)"));
        assert!(out.contains(&format!(
            "  {:<40}    2 pending",
            "needs:fix_opt_description"
        )));
        assert!(out.contains("1 marker resolved by open reviews (4 changes checked)"));
        assert!(out.contains("2 removals ignored"));
        assert!(out.contains("out/data.csv, out/data.json, out/data.txt"));
    }

    #[test]
    fn test_print_burndown_without_reviews() {
        let out = render(&CommandResult::Burndown(summary(None)));
        assert!(out.contains("review service skipped"));
        assert!(!out.contains("resolved by open reviews"));
    }

    #[test]
    fn test_print_init() {
        let out = render(&CommandResult::Init(InitSummary {
            config_path: PathBuf::from(".burndownrc.json"),
        }));
        assert_eq!(out, "\u{2713} Created .burndownrc.json\n");
    }
}
