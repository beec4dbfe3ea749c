//! The audit pipeline: fetch, extract, report
//!
//! Every check after the fetch is advisory. A missing title does not stop
//! the description check, and so on; only a failed fetch ends the audit.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;

use crate::fetch::fetch_page;
use crate::page::PageSignals;

// Recommended ranges, exclusive on both ends
const TITLE_MIN: usize = 50;
const TITLE_MAX: usize = 70;
const DESC_MIN: usize = 140;
const DESC_MAX: usize = 160;

const DESC_PREVIEW_CHARS: usize = 70;
const SLOW_SECS: f64 = 1.0;

/// Audit `url` and print the report to stdout.
pub async fn run_audit(url: &str) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    audit(url, &mut out).await
}

/// Fetch `url` and write the full report to `out`.
///
/// A fetch failure is reported as a single line and ends the audit; it is
/// not an error at this boundary.
pub async fn audit(url: &str, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n--- Auditing page: {url} ---\n")?;

    let fetched = match fetch_page(url).await {
        Ok(page) => page,
        Err(e) => {
            writeln!(out, "❌ Failed to load the page. Error: {e}")?;
            return Ok(());
        }
    };

    let signals = PageSignals::from_html(&fetched.body);
    write_report(out, &signals, fetched.elapsed)?;

    writeln!(out, "\n--- Audit complete ---")?;
    Ok(())
}

fn write_report(out: &mut dyn Write, signals: &PageSignals, elapsed: Duration) -> Result<()> {
    // 1. Title
    match &signals.title {
        Some(title) => {
            let len = title.chars().count();
            writeln!(out, "✅ Title: '{title}' ({len} chars)")?;
            if !(TITLE_MIN < len && len < TITLE_MAX) {
                writeln!(
                    out,
                    "   ⚠️ Recommended Title length: {TITLE_MIN}-{TITLE_MAX} characters."
                )?;
            }
        }
        None => writeln!(out, "❌ Title not found!")?,
    }

    // 2. Description
    match &signals.description {
        Some(desc) => {
            let len = desc.chars().count();
            // The ellipsis is printed even when the content is shorter
            // than the preview width.
            let preview: String = desc.chars().take(DESC_PREVIEW_CHARS).collect();
            writeln!(out, "✅ Description: '{preview}...' ({len} chars)")?;
            if !(DESC_MIN < len && len < DESC_MAX) {
                writeln!(
                    out,
                    "   ⚠️ Recommended Description length: {DESC_MIN}-{DESC_MAX} characters."
                )?;
            }
        }
        None => writeln!(out, "❌ Description not found!")?,
    }

    // 3. H1
    match signals.h1s.len() {
        1 => writeln!(out, "✅ H1: '{}'", signals.h1s[0])?,
        0 => writeln!(out, "❌ H1 not found!")?,
        n => writeln!(out, "❌ Found {n} H1 tags. There should be only one!")?,
    }

    // 4. Text volume
    writeln!(out, "✅ Text volume: roughly {} words.", signals.word_count)?;

    // 5. Response time
    let secs = elapsed.as_secs_f64();
    writeln!(out, "✅ Server response time: {secs:.2} sec.")?;
    if secs > SLOW_SECS {
        writeln!(
            out,
            "   ⚠️ On the slow side. Ideal response time is under 0.5 sec."
        )?;
    }

    Ok(())
}
