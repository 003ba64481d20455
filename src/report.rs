//! Human-readable console output. Not a stable format.

use std::io::{self, Write};

use crate::analysis::Analysis;
use crate::audit::{AuditReport, IssueKind};
use crate::dictionary::Dictionary;
use crate::fill::FillPlan;

const RULE: &str = "============================================================";
const KEY_PREVIEW: usize = 20;

/// Full structural report: key preview, distribution, incomplete chapters
/// and exact-threshold samples.
pub fn write_analysis<W: Write>(
    out: &mut W,
    dictionary: &Dictionary,
    analysis: &Analysis,
) -> io::Result<()> {
    writeln!(out, "Total entries: {}", analysis.total_entries)?;
    writeln!(
        out,
        "Parsed entries: {} ({} keys skipped)",
        analysis.parsed_entries, analysis.skipped_keys
    )?;
    writeln!(out, "Books: {}", analysis.total_books)?;
    writeln!(out, "Chapters: {}", analysis.total_chapters)?;

    let keys: Vec<&str> = dictionary.keys().collect();
    writeln!(out, "\nFirst {KEY_PREVIEW} keys:")?;
    for (idx, key) in keys.iter().take(KEY_PREVIEW).enumerate() {
        writeln!(out, "  {}. {key}", idx + 1)?;
    }
    writeln!(out, "\nLast {KEY_PREVIEW} keys:")?;
    let tail = keys.len().saturating_sub(KEY_PREVIEW);
    for (idx, key) in keys[tail..].iter().enumerate() {
        writeln!(out, "  {}. {key}", idx + 1)?;
    }

    writeln!(out, "\nEntries per chapter:")?;
    for (count, chapters) in &analysis.distribution {
        writeln!(out, "  {count} entries: {chapters} chapters")?;
    }

    writeln!(
        out,
        "\nChapters with fewer than {} entries:",
        analysis.threshold
    )?;
    if analysis.incomplete.is_empty() {
        writeln!(out, "  No incomplete chapters found!")?;
    }
    for chapter in &analysis.incomplete {
        writeln!(
            out,
            "  {} {}: {} entries",
            chapter.book, chapter.chapter, chapter.count
        )?;
    }

    writeln!(
        out,
        "\nChapters with exactly {} entries (first {} in source order):",
        analysis.threshold,
        analysis.exact_samples.len()
    )?;
    for sample in &analysis.exact_samples {
        writeln!(
            out,
            "  {} {}: {} entries",
            sample.book,
            sample.chapter,
            sample.keys.len()
        )?;
        for key in &sample.keys {
            writeln!(out, "    - {key}")?;
        }
    }
    Ok(())
}

/// Incomplete chapters grouped by book, with how many entries each lacks.
pub fn write_incomplete<W: Write>(out: &mut W, analysis: &Analysis) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "DICTIONARY PROCESSING")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "\nTotal entries: {}", analysis.total_entries)?;
    writeln!(out, "\nBooks found: {}", analysis.total_books)?;
    writeln!(out, "Chapters found: {}", analysis.total_chapters)?;

    writeln!(out, "\n{RULE}")?;
    writeln!(out, "CHAPTERS WITH FEWER THAN {} ENTRIES", analysis.threshold)?;
    writeln!(out, "{RULE}")?;

    let by_book = analysis.incomplete_by_book();
    if by_book.is_empty() {
        writeln!(out, "\nNo incomplete chapters found!")?;
    }
    for (book, chapters) in by_book {
        writeln!(out, "\n{}:", book.to_uppercase())?;
        for chapter in chapters {
            writeln!(
                out,
                "  Chapter {}: {} entries (missing {})",
                chapter.chapter, chapter.count, chapter.missing
            )?;
        }
    }

    writeln!(out, "\n{RULE}")?;
    writeln!(
        out,
        "Incomplete chapters: {} (entries missing: {})",
        analysis.incomplete.len(),
        analysis.missing_total()
    )?;
    writeln!(out, "{RULE}")?;
    Ok(())
}

pub fn write_fill_plan<W: Write>(out: &mut W, plan: &FillPlan, applied: bool) -> io::Result<()> {
    let verb = if applied { "Added" } else { "Would add" };
    writeln!(out, "{verb} {} entries:", plan.entries.len())?;
    for planned in &plan.entries {
        writeln!(
            out,
            "  + {} ({}, {})",
            planned.key, planned.entry.strong, planned.entry.transliteration
        )?;
    }
    for shortfall in &plan.shortfalls {
        writeln!(
            out,
            "  ! {} {}: word bank exhausted, {} entries still missing",
            shortfall.book, shortfall.chapter, shortfall.unfilled
        )?;
    }
    Ok(())
}

pub fn write_audit<W: Write>(out: &mut W, report: &AuditReport) -> io::Result<()> {
    writeln!(out, "Total entries: {}", report.total_entries)?;
    writeln!(out, "Issues: {}", report.total_issues)?;
    for kind in [
        IssueKind::InvalidKey,
        IssueKind::InvalidStrong,
        IssueKind::EmptyBase,
        IssueKind::EmptyContext,
        IssueKind::InvalidReferences,
    ] {
        writeln!(out, "  {kind}: {}", report.count(kind))?;
    }

    writeln!(out, "\nBy book (total / complete / flagged):")?;
    for (book, audit) in &report.by_book {
        writeln!(
            out,
            "  {book}: {} / {} / {}",
            audit.total, audit.complete, audit.flagged
        )?;
    }

    if !report.issues_preview.is_empty() {
        writeln!(
            out,
            "\nFirst {} issues:",
            report.issues_preview.len()
        )?;
        for issue in &report.issues_preview {
            writeln!(out, "  {}: {}", issue.key, issue.kind)?;
        }
    }
    Ok(())
}
