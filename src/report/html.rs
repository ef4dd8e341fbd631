// Static HTML rendering of the tallies: one section per question, one horizontal bar per answer.

use std::fmt::{self, Write as FmtWrite};

use survey_data::{AnswerTally, QuestionTally};

type Rgb = (u8, u8, u8);

// Four shades of each family, from dark to light.
const NAVY: [Rgb; 4] = [(69, 116, 190), (144, 172, 215), (182, 200, 229), (217, 226, 241)];
const BLUE: [Rgb; 4] = [(97, 157, 209), (158, 196, 226), (191, 215, 236), (222, 235, 245)];
const GREEN: [Rgb; 4] = [(116, 171, 82), (170, 206, 147), (199, 222, 183), (226, 239, 219)];
const YELLOW: [Rgb; 4] = [(251, 190, 64), (253, 215, 118), (252, 227, 161), (255, 240, 208)];
const RED: [Rgb; 4] = [(233, 125, 68), (241, 177, 138), (245, 203, 176), (249, 229, 215)];

const PALETTE_SIZE: usize = 20;

/// The color of the n-th answer of a question. The palette is cyclic.
pub fn get_color(n: usize) -> Rgb {
    let n = n % PALETTE_SIZE;
    let family = [NAVY, BLUE, GREEN, YELLOW, RED][n % 5];
    family[n / 5]
}

fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn format_percent(proportion: f64) -> String {
    let s = format!("{:.1}%", 100.0 * proportion);
    // Rounding errors of the weights
    if s == "99.9%" {
        "100%".to_string()
    } else {
        s
    }
}

fn render_answer(html: &mut String, answer: &AnswerTally) -> fmt::Result {
    let (r, g, b) = get_color(answer.rank);
    let width = format!("{:.1}%", 100.0 * answer.proportion);
    writeln!(html, "<div class=\"answer\">")?;
    writeln!(html, "<div class=\"label\">{}</div>", esc(&answer.label))?;
    writeln!(
        html,
        "<div class=\"bar\"><div class=\"fill\" style=\"width: {}; background-color: rgba({}, {}, {}, 1)\"></div></div>",
        width, r, g, b
    )?;
    writeln!(
        html,
        "<div class=\"percent\">{}</div><div class=\"count\">{}</div>",
        format_percent(answer.proportion),
        answer.count
    )?;
    writeln!(html, "</div>")
}

fn render_question(html: &mut String, question: &QuestionTally) -> fmt::Result {
    let title = format!("{}. {}", question.column, question.question);
    writeln!(html, "<section class=\"question\">")?;
    writeln!(html, "<h2>{}</h2>", esc(&title))?;
    for answer in question.answers.iter() {
        render_answer(html, answer)?;
    }
    writeln!(html, "</section>")
}

/// Renders the whole report page.
pub fn render_page(title: &str, questions: &[QuestionTally]) -> Result<String, fmt::Error> {
    let mut html = String::with_capacity(1024 * (questions.len() + 1));
    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\"/>")?;
    writeln!(html, "<title>{}</title>", esc(title))?;
    writeln!(html, "<style>")?;
    writeln!(
        html,
        "body{{font-family:Arial,Helvetica,sans-serif;margin:20px;color:#222;background:#fff;}}"
    )?;
    writeln!(html, "h1{{margin:0 0 8px 0;font-size:24px;}}")?;
    writeln!(html, "h2{{margin:24px 0 8px 0;font-size:18px;}}")?;
    writeln!(
        html,
        ".answer{{display:flex;align-items:center;max-width:900px;margin:2px 0;font-size:13px;}}"
    )?;
    writeln!(html, ".label{{width:35%;padding-right:8px;}}")?;
    writeln!(html, ".bar{{width:45%;background:#f4f4f4;}}")?;
    writeln!(html, ".fill{{height:16px;}}")?;
    writeln!(html, ".percent{{width:10%;text-align:right;}}")?;
    writeln!(html, ".count{{width:10%;text-align:right;color:#777;}}")?;
    writeln!(html, "</style>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, "<h1>{}</h1>", esc(title))?;
    for question in questions {
        render_question(&mut html, question)?;
    }
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}
