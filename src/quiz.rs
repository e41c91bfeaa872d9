//! Mock Test page: static multiple-choice quiz over a fixed question bank.

use crossterm::event::{KeyCode, KeyEvent};
use rand::seq::IndexedRandom;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub answer: usize,
}

macro_rules! q {
    ($prompt:expr, [$a:expr, $b:expr, $c:expr, $d:expr], $answer:expr) => {
        Question {
            prompt: $prompt,
            options: [$a, $b, $c, $d],
            answer: $answer,
        }
    };
}

pub static QUESTION_BANK: &[(&str, &[Question])] = &[
    (
        "GK",
        &[
            q!("What is the capital of France?", ["Paris", "London", "Rome", "Berlin"], 0),
            q!("Who wrote 'Hamlet'?", ["Shakespeare", "Dickens", "Austen", "Hugo"], 0),
            q!(
                "Largest planet in the Solar System?",
                ["Earth", "Jupiter", "Saturn", "Mars"],
                1
            ),
            q!(
                "Which ocean is the largest?",
                ["Atlantic", "Pacific", "Indian", "Arctic"],
                1
            ),
            q!(
                "In which year did World War II end?",
                ["1945", "1939", "1918", "1965"],
                0
            ),
        ],
    ),
    (
        "Python",
        &[
            q!(
                "Who developed Python?",
                [
                    "Guido van Rossum",
                    "James Gosling",
                    "Dennis Ritchie",
                    "Bjarne Stroustrup"
                ],
                0
            ),
            q!(
                "Which keyword is used to define a function?",
                ["func", "def", "function", "lambda"],
                1
            ),
            q!("What is the output of print(2**3)?", ["6", "8", "9", "12"], 1),
            q!(
                "Which library is used for data manipulation?",
                ["NumPy", "Pandas", "Matplotlib", "Scikit-learn"],
                1
            ),
            q!(
                "What does PEP stand for?",
                [
                    "Python Enhancement Proposal",
                    "Python Execution Program",
                    "Program Execution Protocol",
                    "None"
                ],
                0
            ),
        ],
    ),
    (
        "Java",
        &[
            q!(
                "Who developed Java?",
                [
                    "James Gosling",
                    "Guido van Rossum",
                    "Dennis Ritchie",
                    "Ken Thompson"
                ],
                0
            ),
            q!(
                "Java is a ___ language.",
                ["Compiled", "Interpreted", "Both", "None"],
                2
            ),
            q!(
                "Which keyword is used to inherit a class?",
                ["super", "extends", "this", "implements"],
                1
            ),
            q!(
                "Which method is the entry point of Java?",
                ["start()", "main()", "init()", "run()"],
                1
            ),
            q!(
                "Which company owns Java now?",
                ["Microsoft", "Oracle", "Sun Microsystems", "Google"],
                1
            ),
        ],
    ),
    (
        "HTML",
        &[
            q!(
                "HTML stands for?",
                [
                    "Hyper Text Markup Language",
                    "HighText Machine Language",
                    "Hyperlinks Text Mark Language",
                    "None"
                ],
                0
            ),
            q!(
                "Which tag is used for inserting an image?",
                ["<img>", "<image>", "<src>", "<pic>"],
                0
            ),
            q!(
                "Which tag creates a hyperlink?",
                ["<a>", "<link>", "<href>", "<hyper>"],
                0
            ),
            q!(
                "Which is the largest heading tag?",
                ["<h6>", "<h1>", "<head>", "<title>"],
                1
            ),
            q!(
                "Which attribute specifies the URL in <a>?",
                ["src", "href", "link", "url"],
                1
            ),
        ],
    ),
    (
        "CSS",
        &[
            q!(
                "CSS stands for?",
                [
                    "Cascading Style Sheets",
                    "Creative Style System",
                    "Computer Styling Sheet",
                    "None"
                ],
                0
            ),
            q!(
                "Which property changes text color?",
                ["font-color", "color", "text-style", "background-color"],
                1
            ),
            q!(
                "Which property controls font size?",
                ["font-size", "text-size", "size", "font"],
                0
            ),
            q!(
                "Which property sets background color?",
                ["background-color", "bg-color", "color", "back-color"],
                0
            ),
            q!(
                "Which is correct CSS syntax?",
                [
                    "body:color=black;",
                    "body{color:black;}",
                    "{body:color=black;}",
                    "body=color:black;"
                ],
                1
            ),
        ],
    ),
    (
        "JavaScript",
        &[
            q!(
                "Which symbol is used for comments in JS?",
                ["//", "#", "<!--", "/*"],
                0
            ),
            q!(
                "Which keyword declares a variable?",
                ["var", "int", "string", "declare"],
                0
            ),
            q!(
                "Which method prints to console?",
                [
                    "console.log()",
                    "print()",
                    "log.console()",
                    "document.log()"
                ],
                0
            ),
            q!(
                "Which company developed JavaScript?",
                ["Netscape", "Microsoft", "Sun Microsystems", "Oracle"],
                0
            ),
            q!(
                "Which operator is used for equality?",
                ["=", "==", "===", "!="],
                2
            ),
        ],
    ),
];

const COUNT_CHOICES: [usize; 2] = [5, 10];

/// Random sample without replacement, capped at the topic size. Option order
/// inside each question stays fixed.
pub fn sample_questions(topic: &[Question], requested: usize) -> Vec<&Question> {
    topic
        .choose_multiple(&mut rand::rng(), requested.min(topic.len()))
        .collect()
}

enum Phase {
    Start,
    Active {
        questions: Vec<&'static Question>,
        index: usize,
        score: usize,
        selected: Option<usize>,
    },
    Done {
        score: usize,
        total: usize,
    },
}

pub struct QuizState {
    phase: Phase,
    topic_idx: usize,
    count_idx: usize,
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            phase: Phase::Start,
            topic_idx: 0,
            count_idx: 0,
        }
    }
}

impl QuizState {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match &mut self.phase {
            Phase::Start => match key.code {
                KeyCode::Up => {
                    self.topic_idx = self.topic_idx.checked_sub(1).unwrap_or(QUESTION_BANK.len() - 1)
                }
                KeyCode::Down => self.topic_idx = (self.topic_idx + 1) % QUESTION_BANK.len(),
                KeyCode::Left | KeyCode::Right => {
                    self.count_idx = (self.count_idx + 1) % COUNT_CHOICES.len()
                }
                KeyCode::Enter => {
                    let (_, questions) = QUESTION_BANK[self.topic_idx];
                    let sampled = sample_questions(questions, COUNT_CHOICES[self.count_idx]);
                    self.phase = Phase::Active {
                        questions: sampled,
                        index: 0,
                        score: 0,
                        selected: None,
                    };
                }
                _ => {}
            },
            Phase::Active {
                questions,
                index,
                score,
                selected,
            } => match key.code {
                KeyCode::Up => {
                    *selected = Some(selected.map_or(3, |s| s.checked_sub(1).unwrap_or(3)))
                }
                KeyCode::Down => *selected = Some(selected.map_or(0, |s| (s + 1) % 4)),
                KeyCode::Char(c @ '1'..='4') => {
                    *selected = Some(c as usize - '1' as usize);
                }
                KeyCode::Enter => {
                    let Some(choice) = *selected else {
                        return;
                    };
                    if choice == questions[*index].answer {
                        *score += 1;
                    }
                    *selected = None;
                    *index += 1;
                    let finished = *index >= questions.len();
                    let (final_score, total) = (*score, questions.len());
                    if finished {
                        self.phase = Phase::Done {
                            score: final_score,
                            total,
                        };
                    }
                }
                _ => {}
            },
            Phase::Done { .. } => {
                if key.code == KeyCode::Enter {
                    self.phase = Phase::Start;
                }
            }
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect) {
        match &self.phase {
            Phase::Start => self.draw_start(f, area),
            Phase::Active {
                questions,
                index,
                selected,
                ..
            } => draw_question(f, area, questions, *index, *selected),
            Phase::Done { score, total } => draw_result(f, area, *score, *total),
        }
    }

    fn draw_start(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

        let items: Vec<ListItem> = QUESTION_BANK
            .iter()
            .enumerate()
            .map(|(i, (topic, _))| {
                let style = if i == self.topic_idx {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::styled(*topic, style))
            })
            .collect();
        let topics = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select a Topic (Up/Down)"),
        );
        f.render_widget(topics, chunks[0]);

        let count = Paragraph::new(format!("{} questions", COUNT_CHOICES[self.count_idx])).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Total Questions (Left/Right)"),
        );
        f.render_widget(count, chunks[1]);

        let help = Paragraph::new("Enter starts the test.").block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[2]);
    }
}

fn draw_question(
    f: &mut Frame,
    area: Rect,
    questions: &[&'static Question],
    index: usize,
    selected: Option<usize>,
) {
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(6),
        Constraint::Length(3),
    ])
    .split(area);

    let question = questions[index];
    let prompt = Paragraph::new(format!("Q{}: {}", index + 1, question.prompt))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(prompt, chunks[0]);

    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let style = if Some(i) == selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(format!("{}. {}", i + 1, option), style))
        })
        .collect();
    let options = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Select your answer (1-4 or Up/Down, Enter for next)"),
    );
    f.render_widget(options, chunks[1]);

    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio((index + 1) as f64 / questions.len() as f64);
    f.render_widget(progress, chunks[2]);
}

fn draw_result(f: &mut Frame, area: Rect, score: usize, total: usize) {
    let message = Paragraph::new(format!(
        "Test Completed! Your Score: {score}/{total}\n\nPress Enter to restart."
    ))
    .style(Style::default().fg(Color::Green))
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title("Result"));
    f.render_widget(message, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn bank_has_six_topics_of_five_questions() {
        assert_eq!(QUESTION_BANK.len(), 6);
        for (topic, questions) in QUESTION_BANK {
            assert_eq!(questions.len(), 5, "topic {topic}");
            for q in *questions {
                assert!(q.answer < q.options.len());
            }
        }
    }

    #[test]
    fn sampling_caps_at_topic_size_without_duplicates() {
        let (_, python) = QUESTION_BANK[1];
        let sampled = sample_questions(python, 10);
        assert_eq!(sampled.len(), 5);
        for (i, a) in sampled.iter().enumerate() {
            for b in &sampled[i + 1..] {
                assert!(!std::ptr::eq(*a, *b));
            }
        }
    }

    #[test]
    fn correct_answers_accumulate_score() {
        let mut state = QuizState::default();
        state.handle_key(key(KeyCode::Enter)); // start with topic GK, 5 questions

        let questions: Vec<&'static Question> = match &state.phase {
            Phase::Active { questions, .. } => questions.clone(),
            _ => panic!("quiz did not start"),
        };

        for question in &questions {
            let digit = char::from(b'1' + question.answer as u8);
            state.handle_key(key(KeyCode::Char(digit)));
            state.handle_key(key(KeyCode::Enter));
        }

        match state.phase {
            Phase::Done { score, total } => {
                assert_eq!(score, 5);
                assert_eq!(total, 5);
            }
            _ => panic!("quiz did not finish"),
        }
    }

    #[test]
    fn enter_without_selection_does_not_advance() {
        let mut state = QuizState::default();
        state.handle_key(key(KeyCode::Enter));
        state.handle_key(key(KeyCode::Enter)); // no option selected
        match &state.phase {
            Phase::Active { index, score, .. } => {
                assert_eq!(*index, 0);
                assert_eq!(*score, 0);
            }
            _ => panic!("quiz should still be on the first question"),
        }
    }

    #[test]
    fn restart_returns_to_topic_selection() {
        let mut state = QuizState {
            phase: Phase::Done { score: 3, total: 5 },
            topic_idx: 2,
            count_idx: 1,
        };
        state.handle_key(key(KeyCode::Enter));
        assert!(matches!(state.phase, Phase::Start));
    }
}
