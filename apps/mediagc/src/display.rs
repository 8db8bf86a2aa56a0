//! Output rendering and formatting

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use console::{Style, Term};
use mediagc_ops::OperationResult;
use mediagc_types::{CleanReport, ColorChoice, DeleteOutcome, FolderPurge, ScanResult};
use std::io;

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
    /// Color configuration
    color_choice: ColorChoice,
    /// Terminal instance
    term: Term,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool, color_choice: ColorChoice) -> Self {
        Self {
            json_output,
            color_choice,
            term: Term::stdout(),
        }
    }

    /// Render operation result
    pub fn render_result(&self, result: &OperationResult) -> io::Result<()> {
        if self.json_output {
            self.render_json(result)
        } else {
            self.render_table(result)
        }
    }

    /// Render as JSON
    fn render_json(&self, result: &OperationResult) -> io::Result<()> {
        let json = result.to_json().map_err(io::Error::other)?;
        self.term.write_line(&json)
    }

    /// Render as formatted table
    fn render_table(&self, result: &OperationResult) -> io::Result<()> {
        match result {
            OperationResult::Scan(scan) => self.render_scan(scan),
            OperationResult::Clean(report) => self.render_clean(report),
            OperationResult::Success(message) => self.term.write_line(message),
        }
    }

    fn render_scan(&self, scan: &ScanResult) -> io::Result<()> {
        let mut summary = Table::new();
        summary
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        summary.set_header(vec![
            Cell::new("Products").add_attribute(Attribute::Bold),
            Cell::new("Folders").add_attribute(Attribute::Bold),
            Cell::new("Orphaned folders").add_attribute(Attribute::Bold),
            Cell::new("Orphaned files").add_attribute(Attribute::Bold),
            Cell::new("Reclaimable").add_attribute(Attribute::Bold),
        ]);
        summary.add_row(vec![
            Cell::new(scan.scanned_products),
            Cell::new(scan.scanned_folders),
            self.count_cell(scan.orphaned_folders.len()),
            self.count_cell(scan.orphaned_files.len()),
            Cell::new(format_size(scan.total_orphaned_size)),
        ]);
        self.term.write_line(&summary.to_string())?;

        if scan.is_clean() {
            self.term
                .write_line(&self.style_ok("No orphaned images found."))?;
        }

        if !scan.orphaned_folders.is_empty() {
            self.term.write_line("")?;
            self.term
                .write_line(&self.style_heading("Orphaned folders"))?;
            for folder in &scan.orphaned_folders {
                self.term.write_line(&format!("  {folder}/"))?;
            }
        }

        if !scan.orphaned_files.is_empty() {
            let mut files = Table::new();
            files
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic);
            files.set_header(vec![
                Cell::new("Path").add_attribute(Attribute::Bold),
                Cell::new("Size").add_attribute(Attribute::Bold),
                Cell::new("Reason").add_attribute(Attribute::Bold),
            ]);
            for file in &scan.orphaned_files {
                files.add_row(vec![
                    Cell::new(&file.path),
                    Cell::new(format_size(file.size)),
                    Cell::new(&file.reason),
                ]);
            }
            self.term.write_line("")?;
            self.term.write_line(&self.style_heading("Orphaned files"))?;
            self.term.write_line(&files.to_string())?;
        }

        if !scan.skipped_folders.is_empty() {
            self.term.write_line("")?;
            self.term.write_line(&self.style_warning(&format!(
                "{} folder(s) could not be listed and were not analysed:",
                scan.skipped_folders.len()
            )))?;
            for folder in &scan.skipped_folders {
                self.term.write_line(&format!("  {folder}/"))?;
            }
        }

        Ok(())
    }

    fn render_clean(&self, report: &CleanReport) -> io::Result<()> {
        self.render_scan(&report.scan)?;
        self.term.write_line("")?;

        if report.dry_run {
            let files = report.scan.orphaned_files.len();
            let folders = report.scan.orphaned_folders.len();
            self.term.write_line(&format!(
                "Plan: delete {files} file(s) ({}); {folders} orphaned folder(s) need --folders.",
                format_size(report.scan.total_orphaned_size)
            ))?;
            self.term
                .write_line("Nothing was deleted. Re-run with --yes to apply.")?;
            return Ok(());
        }

        if let Some(files) = report.files {
            self.render_outcome("Files", files)?;
        }
        if let Some(purge) = &report.folders {
            self.render_purge(purge)?;
        }
        self.term
            .write_line(&format!("Finished in {} ms", report.duration_ms))
    }

    fn render_outcome(&self, label: &str, outcome: DeleteOutcome) -> io::Result<()> {
        let line = format!(
            "{label}: {} deleted, {} failed",
            outcome.success, outcome.failed
        );
        if outcome.failed == 0 {
            self.term.write_line(&self.style_ok(&line))
        } else {
            self.term.write_line(&self.style_warning(&line))
        }
    }

    fn render_purge(&self, purge: &FolderPurge) -> io::Result<()> {
        self.render_outcome("Folder objects", purge.objects)?;
        self.term.write_line(&format!(
            "Folders: {} removed, {} incomplete, {} not listed",
            purge.removed.len(),
            purge.incomplete.len(),
            purge.unlisted.len()
        ))?;
        for folder in purge.incomplete.iter().chain(&purge.unlisted) {
            self.term
                .write_line(&self.style_warning(&format!("  {folder}/")))?;
        }
        Ok(())
    }

    fn count_cell(&self, count: usize) -> Cell {
        let cell = Cell::new(count);
        if self.supports_color() && count > 0 {
            cell.fg(Color::Yellow)
        } else {
            cell
        }
    }

    fn style_heading(&self, text: &str) -> String {
        if self.supports_color() {
            Style::new().bold().apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn style_ok(&self, text: &str) -> String {
        if self.supports_color() {
            Style::new().green().apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn style_warning(&self, text: &str) -> String {
        if self.supports_color() {
            Style::new().yellow().apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Check if color output is supported
    fn supports_color(&self) -> bool {
        match self.color_choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.term.features().colors_supported(),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{size:.0} {}", UNITS[unit_index])
    } else {
        format!("{size:.1} {}", UNITS[unit_index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }
}
