//! Dashboard page: generic CSV metrics and charts over an uploaded or
//! sample dataset.

use std::collections::HashMap;
use std::path::Path;

use chrono::{Duration, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use csv::{ReaderBuilder, WriterBuilder};
use rand::Rng;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{
    Axis, BarChart, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table,
    TableState,
};
use ratatui::Frame;
use serde::{Deserialize, Serialize};

pub const SAMPLE_FILE_NAME: &str = "resumentor_sample_dataset.csv";

/// One row of the built-in sample dataset.
#[derive(Debug, Serialize, Deserialize)]
struct SampleRecord {
    #[serde(rename = "date")]
    date: NaiveDate,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Subcategory")]
    subcategory: String,
    #[serde(rename = "Value")]
    value: i64,
    #[serde(rename = "Region")]
    region: String,
}

/// A loaded CSV: header row plus string cells. Everything the dashboard shows
/// is derived from this, so arbitrary CSVs work.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TableMetrics {
    pub rows: usize,
    pub columns: usize,
    pub missing_cells: usize,
    pub duplicate_rows: usize,
}

pub fn load_csv(path: &Path) -> anyhow::Result<CsvTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(CsvTable { headers, rows })
}

fn sample_records() -> Vec<SampleRecord> {
    let categories = [("Sales", "North"), ("Marketing", "South"), ("IT", "East")];
    let subcats = ["A", "B", "C"];
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut rng = rand::rng();

    let mut records = Vec::new();
    for day in 0..60 {
        let date = start + Duration::days(day);
        for (category, region) in categories {
            records.push(SampleRecord {
                date,
                category: category.to_string(),
                subcategory: subcats[rng.random_range(0..subcats.len())].to_string(),
                value: gaussian_value(&mut rng, 1000.0, 300.0),
                region: region.to_string(),
            });
        }
    }
    records
}

/// The sample dataset: 60 days starting 2024-01-01, one row per category per
/// day, gaussian-ish values around 1000.
pub fn make_sample_table() -> CsvTable {
    let rows = sample_records()
        .into_iter()
        .map(|r| {
            vec![
                r.date.to_string(),
                r.category,
                r.subcategory,
                r.value.to_string(),
                r.region,
            ]
        })
        .collect();

    CsvTable {
        headers: ["date", "Category", "Subcategory", "Value", "Region"]
            .into_iter()
            .map(str::to_string)
            .collect(),
        rows,
    }
}

pub fn write_sample_csv(path: &Path) -> anyhow::Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_path(path)?;
    for record in sample_records() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

// Irwin-Hall approximation of a normal draw: sum of 12 uniforms has mean 6
// and unit variance. Values are clamped non-negative like the source data.
fn gaussian_value(rng: &mut impl Rng, mean: f64, std_dev: f64) -> i64 {
    let z: f64 = (0..12).map(|_| rng.random::<f64>()).sum::<f64>() - 6.0;
    (mean + std_dev * z).abs() as i64
}

/// Cleaning pass: drop duplicate rows, drop rows with any empty cell, trim
/// every cell.
pub fn clean_table(table: &CsvTable) -> CsvTable {
    let mut seen = std::collections::HashSet::new();
    let rows = table
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.trim().to_string())
                .collect::<Vec<_>>()
        })
        .filter(|row| row.iter().all(|cell| !cell.is_empty()))
        .filter(|row| seen.insert(row.clone()))
        .collect();
    CsvTable {
        headers: table.headers.clone(),
        rows,
    }
}

pub fn metrics(table: &CsvTable) -> TableMetrics {
    let missing_cells = table
        .rows
        .iter()
        .map(|row| {
            let empty = row.iter().filter(|cell| cell.trim().is_empty()).count();
            // Short rows count their absent cells as missing too.
            empty + table.headers.len().saturating_sub(row.len())
        })
        .sum();

    let mut seen = std::collections::HashSet::new();
    let duplicate_rows = table.rows.iter().filter(|row| !seen.insert(*row)).count();

    TableMetrics {
        rows: table.rows.len(),
        columns: table.headers.len(),
        missing_cells,
        duplicate_rows,
    }
}

/// Occurrences per distinct value of `column`, descending, for the bar chart.
pub fn value_counts(table: &CsvTable, column: usize) -> Vec<(String, u64)> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for row in &table.rows {
        if let Some(cell) = row.get(column) {
            *counts.entry(cell.as_str()).or_insert(0) += 1;
        }
    }
    let mut counts: Vec<(String, u64)> = counts
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// First column whose every non-empty cell parses as a number, with the
/// parsed series.
pub fn first_numeric_series(table: &CsvTable) -> Option<(usize, Vec<f64>)> {
    for column in 0..table.headers.len() {
        let mut series = Vec::new();
        let mut any = false;
        let mut all_numeric = true;
        for row in &table.rows {
            match row.get(column).map(|c| c.trim()) {
                Some("") | None => continue,
                Some(cell) => match cell.parse::<f64>() {
                    Ok(v) => {
                        any = true;
                        series.push(v);
                    }
                    Err(_) => {
                        all_numeric = false;
                        break;
                    }
                },
            }
        }
        if any && all_numeric {
            return Some((column, series));
        }
    }
    None
}

pub struct DashboardState {
    table: Option<CsvTable>,
    original: Option<CsvTable>,
    path_input: String,
    editing_path: bool,
    show_preview: bool,
    status: Option<String>,
    table_state: TableState,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            table: None,
            original: None,
            path_input: String::new(),
            editing_path: false,
            show_preview: true,
            status: None,
            table_state: TableState::default(),
        }
    }
}

impl DashboardState {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.editing_path {
            match key.code {
                KeyCode::Char(c) => self.path_input.push(c),
                KeyCode::Backspace => {
                    self.path_input.pop();
                }
                KeyCode::Esc => self.editing_path = false,
                KeyCode::Enter => {
                    self.editing_path = false;
                    let path = self.path_input.trim().to_string();
                    match load_csv(Path::new(&path)) {
                        Ok(table) => {
                            self.original = Some(table.clone());
                            self.table = Some(table);
                            self.table_state.select(Some(0));
                            self.status = Some(format!("Loaded {path}"));
                        }
                        Err(err) => {
                            self.status = Some(format!("Failed to read CSV {path}: {err}"));
                        }
                    }
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('o') => {
                self.editing_path = true;
                self.status = None;
            }
            KeyCode::Char('s') => {
                let table = make_sample_table();
                self.original = Some(table.clone());
                self.table = Some(table);
                self.table_state.select(Some(0));
                self.status = Some("Loaded sample dataset.".to_string());
            }
            KeyCode::Char('w') => {
                self.status = Some(match write_sample_csv(Path::new(SAMPLE_FILE_NAME)) {
                    Ok(()) => format!("Sample dataset written to {SAMPLE_FILE_NAME}"),
                    Err(err) => format!("Failed to write sample dataset: {err}"),
                });
            }
            KeyCode::Char('c') => {
                if let Some(table) = &self.table {
                    let cleaned = clean_table(table);
                    let removed = table.rows.len() - cleaned.rows.len();
                    self.table = Some(cleaned);
                    self.status = Some(format!(
                        "Cleaned: {removed} rows removed, text trimmed."
                    ));
                }
            }
            KeyCode::Char('r') => {
                if let Some(original) = &self.original {
                    self.table = Some(original.clone());
                    self.status = Some("Dataset reset to original.".to_string());
                }
            }
            KeyCode::Char('p') => self.show_preview = !self.show_preview,
            KeyCode::Down => self.move_selection(1),
            KeyCode::Up => self.move_selection(-1),
            _ => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let Some(table) = &self.table else { return };
        if table.rows.is_empty() {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected().unwrap_or(0) as isize;
        let len = table.rows.len() as isize;
        let next = (current + delta).rem_euclid(len);
        self.table_state.select(Some(next as usize));
    }

    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(10),
        ])
        .split(area);

        self.draw_controls(f, chunks[0]);
        self.draw_metrics(f, chunks[1]);
        self.draw_preview(f, chunks[2]);
        self.draw_charts(f, chunks[3]);
    }

    fn draw_controls(&self, f: &mut Frame, area: Rect) {
        let text = if self.editing_path {
            format!("CSV path: {}_", self.path_input)
        } else if let Some(status) = &self.status {
            status.clone()
        } else {
            "o: open CSV  s: sample data  w: write sample CSV  c: clean  r: reset  p: preview"
                .to_string()
        };
        let controls = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Data"));
        f.render_widget(controls, area);
    }

    fn draw_metrics(&self, f: &mut Frame, area: Rect) {
        let text = match &self.table {
            Some(table) => {
                let m = metrics(table);
                format!(
                    "Rows: {}    Columns: {}    Missing Values: {}    Duplicate Rows: {}",
                    m.rows, m.columns, m.missing_cells, m.duplicate_rows
                )
            }
            None => "Load a CSV or press 's' for the sample dataset.".to_string(),
        };
        let widget = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Dataset Metrics"));
        f.render_widget(widget, area);
    }

    fn draw_preview(&mut self, f: &mut Frame, area: Rect) {
        let Self {
            table,
            table_state,
            show_preview,
            ..
        } = self;
        let (Some(table), true) = (table, *show_preview) else {
            let text = if *show_preview {
                "No dataset loaded."
            } else {
                "Preview hidden (p to show)."
            };
            let empty = Paragraph::new(text)
                .block(Block::default().borders(Borders::ALL).title("Preview"));
            f.render_widget(empty, area);
            return;
        };

        let selected_style = Style::default().add_modifier(Modifier::REVERSED).fg(Color::Yellow);
        let header_cells = table
            .headers
            .iter()
            .map(|h| Cell::from(h.as_str()).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells).height(1).bottom_margin(1);

        let rows = table
            .rows
            .iter()
            .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.as_str()))));

        let width = Constraint::Min(12);
        let widths = vec![width; table.headers.len().max(1)];
        let widget = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("Preview (Up/Down)"))
            .highlight_style(selected_style)
            .highlight_symbol(">> ");
        f.render_stateful_widget(widget, area, table_state);
    }

    fn draw_charts(&self, f: &mut Frame, area: Rect) {
        let Some(table) = &self.table else {
            return;
        };
        let halves =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

        // Bar chart over the second column (first is usually the date)
        let column = usize::from(table.headers.len() > 1);
        let counts = value_counts(table, column);
        let bars: Vec<(&str, u64)> = counts
            .iter()
            .take(6)
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        let title = format!(
            "{} counts",
            table.headers.get(column).map(String::as_str).unwrap_or("value")
        );
        let bar_chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title(title))
            .bar_width(9)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
            .data(&bars);
        f.render_widget(bar_chart, halves[0]);

        // Line chart over the first numeric column
        if let Some((column, series)) = first_numeric_series(table) {
            let points: Vec<(f64, f64)> = series
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v))
                .collect();
            let max = series.iter().cloned().fold(f64::MIN, f64::max).max(1.0);
            let min = series.iter().cloned().fold(f64::MAX, f64::min).min(0.0);
            let dataset = Dataset::default()
                .name(table.headers[column].as_str())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Green))
                .data(&points);
            let chart = Chart::new(vec![dataset])
                .block(Block::default().borders(Borders::ALL).title("Line Chart"))
                .x_axis(
                    Axis::default()
                        .bounds([0.0, points.len().saturating_sub(1) as f64])
                        .labels(vec![
                            Span::raw("0"),
                            Span::raw(points.len().saturating_sub(1).to_string()),
                        ]),
                )
                .y_axis(
                    Axis::default()
                        .bounds([min, max])
                        .labels(vec![
                            Span::raw(format!("{min:.0}")),
                            Span::raw(format!("{max:.0}")),
                        ]),
                );
            f.render_widget(chart, halves[1]);
        } else {
            let empty = Paragraph::new("No numeric columns available for line chart.")
                .block(Block::default().borders(Borders::ALL).title("Line Chart"));
            f.render_widget(empty, halves[1]);
        }
    }
}
