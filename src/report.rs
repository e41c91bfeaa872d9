//! Plain-text report rendering and the downloadable HTML artifact.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::analysis::Analysis;

pub const REPORT_FILE_NAME: &str = "resume_report.txt";

/// The plain-text match report.
pub fn render_text(analysis: &Analysis) -> String {
    let matched = join_or_placeholder(&analysis.skills.matched);
    let missing = join_or_placeholder(&analysis.skills.missing);

    format!(
        "Resume Match Report\n\
         \n\
         ATS Match Score: {:.2}%\n\
         \n\
         Matched Skills:\n\
         {matched}\n\
         \n\
         Missing Skills:\n\
         {missing}\n\
         \n\
         Tips:\n\
         - Tailor your resume bullet points to the JD.\n\
         - Use action verbs and quantify impact (%, $, time saved).\n\
         - Mirror important keywords naturally in relevant sections.\n",
        analysis.score
    )
}

/// Inline `data:` link that downloads the text report client-side.
pub fn download_link(report: &str) -> String {
    let b64 = STANDARD.encode(report.as_bytes());
    format!(
        "<a class=\"download-link\" href=\"data:file/txt;base64,{b64}\" \
         download=\"{REPORT_FILE_NAME}\">Download Report</a>"
    )
}

/// Stand-alone HTML page embedding the analysis summary and the download
/// link. Written next to the text report so the artifact can be opened in a
/// browser.
pub fn render_html(analysis: &Analysis) -> String {
    let report = render_text(analysis);
    let link = download_link(&report);
    let suggestions: String = analysis
        .suggestions
        .iter()
        .map(|s| format!("    <li>{}</li>\n", escape_html(s)))
        .collect();

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>Resume Match Report</title></head>\n\
         <body>\n\
         <h1>Resume Match Report</h1>\n\
         <p>ATS Match Score: <strong>{:.2}%</strong></p>\n\
         <p>Matched: {}</p>\n\
         <p>Missing: {}</p>\n\
         <h2>Suggestions</h2>\n\
         <ul>\n{suggestions}</ul>\n\
         {link}\n\
         </body>\n\
         </html>\n",
        analysis.score,
        escape_html(&join_or_placeholder(&analysis.skills.matched)),
        escape_html(&join_or_placeholder(&analysis.skills.missing)),
    )
}

fn join_or_placeholder(skills: &[&str]) -> String {
    if skills.is_empty() {
        "-".to_string()
    } else {
        skills.join(", ")
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    #[test]
    fn report_embeds_score_and_skill_lists() {
        let analysis = analyze(
            "Python and Docker projects",
            "Python, Docker and AWS required",
        );
        let report = render_text(&analysis);
        assert!(report.contains(&format!("ATS Match Score: {:.2}%", analysis.score)));
        assert!(report.contains("docker, python"));
        assert!(report.contains("aws"));
        assert!(report.lines().filter(|l| l.starts_with("- ")).count() == 3);
    }

    #[test]
    fn empty_skill_lists_use_placeholder() {
        let analysis = analyze("plain text", "generic description");
        let report = render_text(&analysis);
        assert!(report.contains("Matched Skills:\n-\n"));
        assert!(report.contains("Missing Skills:\n-\n"));
    }

    #[test]
    fn download_link_round_trips_through_base64() {
        let link = download_link("hello report");
        let b64 = link
            .split("base64,")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap();
        let decoded = STANDARD.decode(b64).unwrap();
        assert_eq!(decoded, b"hello report");
        assert!(link.contains("download=\"resume_report.txt\""));
    }

    #[test]
    fn html_page_escapes_markup_and_embeds_link() {
        let mut analysis = analyze("x", "y");
        analysis.suggestions = vec!["use <b> tags & such".to_string()];
        let html = render_html(&analysis);
        assert!(html.contains("use &lt;b&gt; tags &amp; such"));
        assert!(html.contains("data:file/txt;base64,"));
    }
}
