// WHY: presentation layer for the CLI; the colorizer never knows how its output is shown

use anyhow::Result;
use clap::ValueEnum;
use std::fmt::Write as _;

use crate::colorizer::{ColoredSentence, Rgb};

/// Output format for rendered sentences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// 24-bit ANSI colored terminal text
    #[default]
    Ansi,
    /// `<span>` per sentence inside a paragraph
    Html,
    /// Pretty JSON array of `{value, length, color}` records
    Json,
    /// index<TAB>length<TAB>color<TAB>sentence
    Tsv,
}

/// Render sentences in the given format. The result always ends with a newline.
pub fn render(sentences: &[ColoredSentence], format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Ansi => render_ansi(sentences),
        OutputFormat::Html => render_html(sentences),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(sentences)?),
        OutputFormat::Tsv => render_tsv(sentences),
    };
    Ok(rendered)
}

fn render_ansi(sentences: &[ColoredSentence]) -> String {
    let mut out = String::new();
    for sentence in sentences {
        match Rgb::from_hex(&sentence.color) {
            Some(Rgb { r, g, b }) => {
                let _ = write!(out, "\x1b[38;2;{r};{g};{b}m{}\x1b[0m", sentence.value);
            }
            None => out.push_str(&sentence.value),
        }
    }
    out.push('\n');
    out
}

fn render_html(sentences: &[ColoredSentence]) -> String {
    let mut out = String::from("<p>");
    for sentence in sentences {
        let _ = write!(
            out,
            "<span style=\"color: {}\" title=\"{} words\">{}</span>",
            escape_html(&sentence.color),
            sentence.length,
            escape_html(&sentence.value)
        );
    }
    out.push_str("</p>\n");
    out
}

fn render_tsv(sentences: &[ColoredSentence]) -> String {
    let mut out = String::new();
    for (index, sentence) in sentences.iter().enumerate() {
        // WHY: one record per line, so interior line breaks and tabs become spaces
        let flattened: String = sentence
            .value
            .chars()
            .map(|ch| if matches!(ch, '\n' | '\r' | '\t') { ' ' } else { ch })
            .collect();
        let _ = writeln!(out, "{index}\t{}\t{}\t{flattened}", sentence.length, sentence.color);
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
