//! Terminal styling for calendar cells and stat pages.
//!
//! The core emits [`DayCategory`] tags; the mapping from tag to color lives
//! here so the renderer stays presentation-free.

use colored::Colorize;
use locwork::calendar::{DayCategory, DayCell, MonthGrid, CELL_SEPARATOR, WEEKDAY_HEADERS};
use locwork::stats::StatReport;
use locwork::viewer::StatPage;

fn style_cell(cell: &DayCell) -> String {
    let label = cell.label();
    let styled = match cell.category {
        DayCategory::Default => label.dimmed(),
        DayCategory::Free => label.normal(),
        DayCategory::Home => label.green().underline(),
        DayCategory::Office => label.yellow().underline(),
    };
    if cell.in_month {
        styled.to_string()
    } else {
        styled.italic().to_string()
    }
}

pub fn calendar_lines(grid: &MonthGrid) -> Vec<String> {
    let header = WEEKDAY_HEADERS.join(CELL_SEPARATOR);
    let separator = "-".repeat(header.len()).dimmed().to_string();

    let mut lines = vec![header.bold().to_string(), separator];
    for week in &grid.weeks {
        let cells: Vec<String> = week.iter().map(style_cell).collect();
        lines.push(cells.join(CELL_SEPARATOR));
    }
    lines
}

pub fn stat_lines(report: &StatReport) -> Vec<String> {
    let mut lines = vec!["Distribution".bold().to_string()];
    if report.locations.is_empty() {
        lines.push("  (nothing logged)".dimmed().to_string());
    }
    for lc in &report.locations {
        lines.push(format!(
            "  {:<16} {:>3}  {:>5.1}%",
            lc.location, lc.count, lc.percent
        ));
    }

    lines.push(String::new());
    lines.push("Workdays".bold().to_string());
    lines.push(format!("  This month  {}", report.weekdays));
    lines.push(format!("  Logged      {}", report.logged_days));
    lines.push(format!("  Unlogged    {}", report.unlogged_days));
    lines
}

pub fn page_lines(page: &StatPage) -> Vec<String> {
    let mut lines = vec![page.start.format("%B %Y").to_string().bold().to_string()];
    lines.push(String::new());
    lines.extend(calendar_lines(&page.grid));
    lines.push(String::new());
    lines.extend(stat_lines(&page.report));
    lines
}
