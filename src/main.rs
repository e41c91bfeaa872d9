use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Context};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod advisor;
mod analysis;
mod app;
mod dashboard;
mod extract;
mod quiz;
mod report;
mod roles;
mod skills;
mod suggest;
mod text;
mod tfidf;
mod utils;

use analysis::analyze;
use extract::{extract_text_or_empty, DocumentKind};
use roles::{sample_jd, SAMPLE_ROLES};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("analyze") => run_analyze(&args[2..]),
        Some("dashboard") => app::run(app::Page::Dashboard),
        Some(other) => bail!("unknown command '{other}'; try: resumentor [analyze|dashboard]"),
        None => app::run(app::Page::Home),
    }
}

/// One-shot pipeline mode: extract, score, print the report, write the
/// downloadable artifacts.
fn run_analyze(args: &[String]) -> anyhow::Result<()> {
    let Some(resume_path) = args.first() else {
        bail!("usage: resumentor analyze <resume.pdf|resume.docx> [job_description.txt]");
    };

    let job_description = match args.get(1) {
        Some(jd_path) => fs::read_to_string(jd_path)
            .with_context(|| format!("failed to read job description {jd_path}"))?,
        None => prompt_for_job_description()?,
    };
    if job_description.trim().is_empty() {
        bail!("a non-empty job description is required");
    }

    let path = Path::new(resume_path);
    let data = fs::read(path).with_context(|| format!("failed to read resume {resume_path}"))?;
    let kind = DocumentKind::from_path(path);
    info!(path = %path.display(), bytes = data.len(), "analyzing resume");

    let raw_text = extract_text_or_empty(kind, &data);
    let result = analyze(&raw_text, job_description.trim());

    let rendered = report::render_text(&result);
    println!("{rendered}");
    println!("Suggestions:");
    for suggestion in &result.suggestions {
        println!("- {suggestion}");
    }

    fs::write(report::REPORT_FILE_NAME, &rendered)?;
    fs::write("resume_report.html", report::render_html(&result))?;
    info!(
        score = result.score,
        matched = result.skills.matched.len(),
        missing = result.skills.missing.len(),
        "report written to {} and resume_report.html",
        report::REPORT_FILE_NAME
    );
    Ok(())
}

fn prompt_for_job_description() -> anyhow::Result<String> {
    println!("Choose a sample job description, or paste your own:");
    for (i, (role, _)) in SAMPLE_ROLES.iter().enumerate() {
        println!("  {}. {}", i + 1, role);
    }
    print!("Enter a number, a role name, or the job description itself: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    if let Ok(choice) = input.parse::<usize>() {
        if (1..=SAMPLE_ROLES.len()).contains(&choice) {
            return Ok(SAMPLE_ROLES[choice - 1].1.to_string());
        }
        bail!("role number out of range: {choice}");
    }
    if let Some(jd) = sample_jd(input) {
        return Ok(jd.to_string());
    }
    Ok(input.to_string())
}
