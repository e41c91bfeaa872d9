//! Career Advisor page: canned keyword replies and random tips.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::seq::IndexedRandom;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Keyword -> reply pairs, checked in order; the first key contained in the
/// lowercased question wins.
const RESPONSES: &[(&str, &str)] = &[
    (
        "data science",
        "Data Science is a great career! Focus on Python, SQL, ML, and visualization tools.",
    ),
    (
        "web development",
        "Web Development is booming! Learn HTML, CSS, JavaScript, and frameworks like React or \
         Django.",
    ),
    (
        "ai",
        "AI is the future! Master Python, TensorFlow/PyTorch, and strong mathematical \
         foundations.",
    ),
    (
        "internship",
        "Apply on LinkedIn, Internshala, and company websites. Build projects to strengthen your \
         profile.",
    ),
    (
        "resume",
        "Keep your resume concise, highlight skills & projects, and tailor it for each job role.",
    ),
];

const FALLBACK_REPLY: &str =
    "I don't have a direct answer, but keep learning, networking, and applying consistently!";

const TIPS: &[&str] = &[
    "Keep learning new skills every day.",
    "Build projects to showcase your skills.",
    "Network with professionals on LinkedIn.",
    "Practice coding regularly if you are into tech.",
    "Work on communication and soft skills too.",
];

/// Fixed artificial "thinking" delay before a reply appears.
const THINKING_DELAY: Duration = Duration::from_millis(1500);

pub fn reply_for(question: &str) -> &'static str {
    let lower = question.to_lowercase();
    RESPONSES
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(_, reply)| *reply)
        .unwrap_or(FALLBACK_REPLY)
}

pub fn random_tip() -> &'static str {
    TIPS.choose(&mut rand::rng()).copied().unwrap_or(TIPS[0])
}

struct Pending {
    question: String,
    ready_at: Instant,
}

#[derive(Default)]
pub struct AdvisorState {
    input: String,
    pending: Option<Pending>,
    answered: Option<(String, &'static str)>,
    tip: Option<&'static str>,
}

impl AdvisorState {
    /// Promotes a pending question to an answer once its deadline passes.
    /// Called on every UI tick; the event loop never blocks on the delay.
    pub fn tick(&mut self) {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| Instant::now() >= p.ready_at);
        if due {
            if let Some(pending) = self.pending.take() {
                let reply = reply_for(&pending.question);
                self.answered = Some((pending.question, reply));
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('t') = key.code {
                self.tip = Some(random_tip());
            }
            return;
        }
        match key.code {
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                let question = self.input.trim().to_string();
                if !question.is_empty() {
                    self.answered = None;
                    self.pending = Some(Pending {
                        question,
                        ready_at: Instant::now() + THINKING_DELAY,
                    });
                    self.input.clear();
                }
            }
            _ => {}
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

        let intro = Paragraph::new(
            "Ask your career-related questions and get suggestions instantly.",
        )
        .block(Block::default().borders(Borders::ALL).title("Career Guidance"));
        f.render_widget(intro, chunks[0]);

        let input = Paragraph::new(self.input.as_str())
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Ask a career question (Enter to send, Ctrl-T for a random tip)"),
            );
        f.render_widget(input, chunks[1]);

        let reply_text: Vec<Line> = if self.pending.is_some() {
            vec![Line::from(Span::styled(
                "Thinking...",
                Style::default().add_modifier(Modifier::ITALIC),
            ))]
        } else if let Some((question, reply)) = &self.answered {
            vec![
                Line::from(Span::styled(
                    format!("You: {question}"),
                    Style::default().fg(Color::Cyan),
                )),
                Line::from(*reply),
            ]
        } else {
            vec![Line::from("No question asked yet.")]
        };
        let reply = Paragraph::new(reply_text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Advisor"));
        f.render_widget(reply, chunks[2]);

        let tip = Paragraph::new(self.tip.unwrap_or("Press Ctrl-T for a career tip."))
            .style(Style::default().fg(Color::Green))
            .block(Block::default().borders(Borders::ALL).title("Tip"));
        f.render_widget(tip, chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keywords_get_their_reply() {
        assert!(reply_for("How do I get into Data Science?").contains("Data Science"));
        assert!(reply_for("tips for my RESUME please").contains("concise"));
    }

    #[test]
    fn first_matching_keyword_wins() {
        // Contains both "data science" and "ai"; insertion order decides.
        assert!(reply_for("data science or ai?").contains("Data Science"));
    }

    #[test]
    fn substring_matching_is_loose_by_design() {
        // "ai" matches inside unrelated words, as in the source behavior.
        assert!(reply_for("how do I maintain momentum").contains("AI is the future"));
    }

    #[test]
    fn unknown_questions_fall_back() {
        assert_eq!(reply_for("what should I eat"), FALLBACK_REPLY);
    }

    #[test]
    fn pending_questions_resolve_after_the_delay() {
        let mut state = AdvisorState::default();
        state.pending = Some(Pending {
            question: "resume advice".to_string(),
            ready_at: Instant::now() - Duration::from_millis(1),
        });
        state.tick();
        assert!(state.pending.is_none());
        let (question, reply) = state.answered.expect("reply missing");
        assert_eq!(question, "resume advice");
        assert!(reply.contains("concise"));
    }

    #[test]
    fn tips_come_from_the_fixed_list() {
        for _ in 0..20 {
            assert!(TIPS.contains(&random_tip()));
        }
    }
}
