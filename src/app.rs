//! Tabbed terminal UI: Home, Resume Analyzer, Career Advisor, Mock Test,
//! Dashboard.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Tabs, Wrap},
    Frame, Terminal,
};
use tracing::info;

use crate::advisor::AdvisorState;
use crate::analysis::{analyze, highlight_resume_text, score_bucket, Analysis, ScoreBucket};
use crate::dashboard::DashboardState;
use crate::extract::{extract_text_or_empty, DocumentKind};
use crate::quiz::QuizState;
use crate::report;
use crate::roles::SAMPLE_ROLES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Analyzer,
    Advisor,
    MockTest,
    Dashboard,
}

const PAGE_TITLES: [&str; 5] = ["Home", "Resume Analyzer", "Career Advisor", "Mock Test", "Dashboard"];

impl Page {
    fn index(self) -> usize {
        match self {
            Page::Home => 0,
            Page::Analyzer => 1,
            Page::Advisor => 2,
            Page::MockTest => 3,
            Page::Dashboard => 4,
        }
    }

    fn from_index(index: usize) -> Self {
        match index % PAGE_TITLES.len() {
            0 => Page::Home,
            1 => Page::Analyzer,
            2 => Page::Advisor,
            3 => Page::MockTest,
            _ => Page::Dashboard,
        }
    }
}

pub struct App {
    page: Page,
    analyzer: AnalyzerState,
    advisor: AdvisorState,
    quiz: QuizState,
    dashboard: DashboardState,
    should_quit: bool,
}

impl App {
    fn new(start_page: Page) -> Self {
        Self {
            page: start_page,
            analyzer: AnalyzerState::default(),
            advisor: AdvisorState::default(),
            quiz: QuizState::default(),
            dashboard: DashboardState::default(),
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Tab => {
                self.page = Page::from_index(self.page.index() + 1);
                return;
            }
            KeyCode::BackTab => {
                self.page = Page::from_index(self.page.index() + PAGE_TITLES.len() - 1);
                return;
            }
            _ => {}
        }

        match self.page {
            Page::Home => {
                if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
            Page::Analyzer => self.analyzer.handle_key(key),
            Page::Advisor => self.advisor.handle_key(key),
            Page::MockTest => self.quiz.handle_key(key),
            Page::Dashboard => self.dashboard.handle_key(key),
        }
    }

    fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(f.size());

        let tabs = Tabs::new(PAGE_TITLES.to_vec())
            .select(self.page.index())
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).title("ResuMentor"));
        f.render_widget(tabs, chunks[0]);

        match self.page {
            Page::Home => draw_home(f, chunks[1]),
            Page::Analyzer => self.analyzer.draw(f, chunks[1]),
            Page::Advisor => self.advisor.draw(f, chunks[1]),
            Page::MockTest => self.quiz.draw(f, chunks[1]),
            Page::Dashboard => self.dashboard.draw(f, chunks[1]),
        }

        let footer = Paragraph::new("Tab switches pages. Ctrl-C quits.")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(footer, chunks[2]);
    }
}

/// Runs the full-screen UI until the user quits.
pub fn run(start_page: Page) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(start_page);
    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.advisor.tick();
        terminal.draw(|f| app.draw(f))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
        if app.should_quit {
            return Ok(());
        }
    }
}

fn draw_home(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            "Empower Your Career with ResuMentor",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(
            "Analyze your resume against a job description, get ATS-style scoring, skill gaps, \
             and suggestions to improve your match.",
        ),
        Line::from(""),
        Line::from("  Resume Analyzer - upload a PDF/DOCX resume and compare it to a JD."),
        Line::from("  Career Advisor  - quick answers to common career questions."),
        Line::from("  Mock Tests      - practice multiple-choice tests by topic."),
        Line::from("  Dashboard       - CSV metrics and charts."),
        Line::from(""),
        Line::from("How it works: upload resume -> get insights -> practice and grow."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Tab to get started, or q to quit.",
            Style::default().fg(Color::Green),
        )),
    ];
    let home = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Welcome"));
    f.render_widget(home, area);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnalyzerFocus {
    ResumePath,
    Role,
    CustomJd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultsTab {
    Matched,
    Missing,
    ResumeText,
    Report,
}

impl ResultsTab {
    const ALL: [ResultsTab; 4] = [
        ResultsTab::Matched,
        ResultsTab::Missing,
        ResultsTab::ResumeText,
        ResultsTab::Report,
    ];

    fn title(self) -> &'static str {
        match self {
            ResultsTab::Matched => "Matched Skills",
            ResultsTab::Missing => "Missing Skills",
            ResultsTab::ResumeText => "Resume Text",
            ResultsTab::Report => "Report",
        }
    }

    fn next(self) -> Self {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

pub struct AnalyzerState {
    resume_path: String,
    /// 0 = custom JD, 1..=N = SAMPLE_ROLES[n - 1].
    role_idx: usize,
    custom_jd: String,
    focus: AnalyzerFocus,
    results_tab: ResultsTab,
    analysis: Option<Analysis>,
    notice: Option<String>,
    scroll: u16,
}

impl Default for AnalyzerState {
    fn default() -> Self {
        Self {
            resume_path: String::new(),
            role_idx: 0,
            custom_jd: String::new(),
            focus: AnalyzerFocus::ResumePath,
            results_tab: ResultsTab::Matched,
            analysis: None,
            notice: None,
            scroll: 0,
        }
    }
}

impl AnalyzerState {
    fn job_description(&self) -> String {
        if self.role_idx == 0 {
            self.custom_jd.trim().to_string()
        } else {
            SAMPLE_ROLES[self.role_idx - 1].1.to_string()
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => self.save_report(),
                KeyCode::Char('e') => self.save_html(),
                KeyCode::Char('t') => {
                    if self.analysis.is_some() {
                        self.results_tab = self.results_tab.next();
                        self.scroll = 0;
                    }
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Up => self.focus = previous_focus(self.focus),
            KeyCode::Down => self.focus = next_focus(self.focus),
            KeyCode::Left | KeyCode::Right if self.focus == AnalyzerFocus::Role => {
                let count = SAMPLE_ROLES.len() + 1;
                self.role_idx = if key.code == KeyCode::Right {
                    (self.role_idx + 1) % count
                } else {
                    (self.role_idx + count - 1) % count
                };
            }
            KeyCode::Char(c) => match self.focus {
                AnalyzerFocus::ResumePath => self.resume_path.push(c),
                AnalyzerFocus::CustomJd => self.custom_jd.push(c),
                AnalyzerFocus::Role => {}
            },
            KeyCode::Backspace => {
                match self.focus {
                    AnalyzerFocus::ResumePath => self.resume_path.pop(),
                    AnalyzerFocus::CustomJd => self.custom_jd.pop(),
                    AnalyzerFocus::Role => None,
                };
            }
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(4),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(4),
            KeyCode::Enter => self.run_analysis(),
            _ => {}
        }
    }

    fn run_analysis(&mut self) {
        let path = self.resume_path.trim().to_string();
        let job_description = self.job_description();
        if path.is_empty() || job_description.is_empty() {
            // Both inputs are required before any computation happens.
            self.notice = Some(
                "Please provide a resume file and a job description to see results.".to_string(),
            );
            return;
        }

        let path = Path::new(&path);
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(err) => {
                self.notice = Some(format!("Could not read {}: {err}", path.display()));
                return;
            }
        };

        let kind = DocumentKind::from_path(path);
        let raw_text = extract_text_or_empty(kind, &data);
        info!(path = %path.display(), bytes = data.len(), "analyzing resume");
        self.analysis = Some(analyze(&raw_text, &job_description));
        self.notice = None;
        self.results_tab = ResultsTab::Matched;
        self.scroll = 0;
    }

    fn save_report(&mut self) {
        let Some(analysis) = &self.analysis else {
            return;
        };
        let rendered = report::render_text(analysis);
        self.notice = Some(match fs::write(report::REPORT_FILE_NAME, rendered) {
            Ok(()) => format!("Report saved to {}", report::REPORT_FILE_NAME),
            Err(err) => format!("Failed to save report: {err}"),
        });
    }

    fn save_html(&mut self) {
        let Some(analysis) = &self.analysis else {
            return;
        };
        let rendered = report::render_html(analysis);
        self.notice = Some(match fs::write("resume_report.html", rendered) {
            Ok(()) => "Report saved to resume_report.html".to_string(),
            Err(err) => format!("Failed to save report: {err}"),
        });
    }

    fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(8),
        ])
        .split(area);

        self.draw_input(
            f,
            chunks[0],
            AnalyzerFocus::ResumePath,
            "Resume file (PDF/DOCX path)",
            &self.resume_path,
        );

        let role_label = if self.role_idx == 0 {
            "Custom".to_string()
        } else {
            SAMPLE_ROLES[self.role_idx - 1].0.to_string()
        };
        self.draw_input(
            f,
            chunks[1],
            AnalyzerFocus::Role,
            "Job description (Left/Right to choose a sample role)",
            &role_label,
        );

        if self.role_idx == 0 {
            self.draw_input(
                f,
                chunks[2],
                AnalyzerFocus::CustomJd,
                "Paste job description here",
                &self.custom_jd,
            );
        } else {
            let jd = Paragraph::new(SAMPLE_ROLES[self.role_idx - 1].1)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Selected Job Description"));
            f.render_widget(jd, chunks[2]);
        }

        match &self.analysis {
            Some(analysis) => self.draw_results(f, chunks[3], analysis),
            None => {
                let text = self.notice.as_deref().unwrap_or(
                    "Enter a resume path, choose or paste a job description, then press Enter.",
                );
                let placeholder = Paragraph::new(text)
                    .wrap(Wrap { trim: true })
                    .block(Block::default().borders(Borders::ALL).title("Results"));
                f.render_widget(placeholder, chunks[3]);
            }
        }
    }

    fn draw_input(
        &self,
        f: &mut Frame,
        area: Rect,
        focus: AnalyzerFocus,
        title: &str,
        value: &str,
    ) {
        let style = if self.focus == focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let widget = Paragraph::new(value.to_string())
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(title.to_string()));
        f.render_widget(widget, area);
    }

    fn draw_results(&self, f: &mut Frame, area: Rect, analysis: &Analysis) {
        let chunks = Layout::vertical([Constraint::Length(5), Constraint::Min(4)]).split(area);
        let top = Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(chunks[0]);

        let color = match score_bucket(analysis.score) {
            ScoreBucket::Low => Color::Red,
            ScoreBucket::Medium => Color::Yellow,
            ScoreBucket::High => Color::Green,
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("ATS Match Score"))
            .gauge_style(Style::default().fg(color))
            .ratio(f64::from(analysis.score / 100.0).clamp(0.0, 1.0))
            .label(format!("{:.2}%", analysis.score));
        f.render_widget(gauge, top[0]);

        let items: Vec<ListItem> = analysis
            .suggestions
            .iter()
            .map(|s| ListItem::new(Line::from(format!("- {s}"))))
            .collect();
        let suggestions = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Suggestions to Improve"),
        );
        f.render_widget(suggestions, top[1]);

        let body = match self.results_tab {
            ResultsTab::Matched => {
                if analysis.skills.matched.is_empty() {
                    "No relevant matched skills found from the predefined dictionary.".to_string()
                } else {
                    analysis.skills.matched.join(", ")
                }
            }
            ResultsTab::Missing => {
                if analysis.skills.missing.is_empty() {
                    "Awesome! No missing skills detected against this JD.".to_string()
                } else {
                    analysis.skills.missing.join(", ")
                }
            }
            ResultsTab::ResumeText => {
                highlight_resume_text(&analysis.resume_text, &analysis.skills.matched)
            }
            ResultsTab::Report => report::render_text(analysis),
        };

        let title = format!(
            "{} (Ctrl-T next tab, Ctrl-S save report, Ctrl-E save HTML){}",
            self.results_tab.title(),
            self.notice
                .as_ref()
                .map(|n| format!(" - {n}"))
                .unwrap_or_default()
        );
        let content = Paragraph::new(body)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(content, chunks[1]);
    }
}

fn next_focus(focus: AnalyzerFocus) -> AnalyzerFocus {
    match focus {
        AnalyzerFocus::ResumePath => AnalyzerFocus::Role,
        AnalyzerFocus::Role => AnalyzerFocus::CustomJd,
        AnalyzerFocus::CustomJd => AnalyzerFocus::ResumePath,
    }
}

fn previous_focus(focus: AnalyzerFocus) -> AnalyzerFocus {
    match focus {
        AnalyzerFocus::ResumePath => AnalyzerFocus::CustomJd,
        AnalyzerFocus::Role => AnalyzerFocus::ResumePath,
        AnalyzerFocus::CustomJd => AnalyzerFocus::Role,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn pages_cycle_in_order() {
        let mut app = App::new(Page::Home);
        for expected in [
            Page::Analyzer,
            Page::Advisor,
            Page::MockTest,
            Page::Dashboard,
            Page::Home,
        ] {
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.page, expected);
        }
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.page, Page::Dashboard);
    }

    #[test]
    fn analysis_requires_both_inputs() {
        let mut state = AnalyzerState::default();
        state.run_analysis();
        assert!(state.analysis.is_none());
        assert!(state
            .notice
            .as_deref()
            .unwrap()
            .contains("resume file and a job description"));
    }

    #[test]
    fn missing_resume_file_is_reported_not_fatal() {
        let mut state = AnalyzerState {
            resume_path: "does/not/exist.pdf".to_string(),
            role_idx: 1,
            ..AnalyzerState::default()
        };
        state.run_analysis();
        assert!(state.analysis.is_none());
        assert!(state.notice.as_deref().unwrap().contains("Could not read"));
    }

    #[test]
    fn sample_role_selection_feeds_the_job_description() {
        let state = AnalyzerState {
            role_idx: 1,
            ..AnalyzerState::default()
        };
        assert_eq!(state.job_description(), SAMPLE_ROLES[0].1);
    }

    #[test]
    fn results_tabs_cycle() {
        let mut tab = ResultsTab::Matched;
        for _ in 0..4 {
            tab = tab.next();
        }
        assert_eq!(tab, ResultsTab::Matched);
    }
}
