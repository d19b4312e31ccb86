use lipi_engine::{
    annotate, find_all_holdings, find_all_pauses, normalize, sort_for_application,
    AnnotationSpan, PausePoint, SpanKind,
};

use super::{die, CliError};

pub fn holdings_cmd(text: &str, json: bool) {
    let text = normalize(text);
    let spans = find_all_holdings(&text);
    if json {
        println!("{}", die!(to_json(&spans), "Error: {}"));
        return;
    }
    println!("{}", mark_up(&text, &spans));
    let chars: Vec<char> = text.chars().collect();
    for span in &spans {
        let segment: String = chars[span.position..span.end()].iter().collect();
        println!(
            "{:>5}  {}  {:<5}  {}",
            span.position,
            span.length,
            span.kind.as_str(),
            segment
        );
    }
}

pub fn pauses_cmd(text: &str, json: bool) {
    let text = normalize(text);
    let spans = find_all_pauses(&text);
    if json {
        let points: Vec<PausePoint> = spans.iter().map(PausePoint::from).collect();
        println!("{}", die!(to_json(&points), "Error: {}"));
        return;
    }
    println!("{}", mark_up(&text, &spans));
    for span in &spans {
        println!("{:>5}  {}", span.position, span.kind.as_str());
    }
}

pub fn annotate_cmd(text: &str) {
    println!("{}", die!(to_json(&annotate(text)), "Error: {}"));
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render spans inline: `[x]` / `[[x]]` for short / long holdings, `^` / `^^`
/// for short / long pauses. Spans past the end of `text` are ignored.
pub fn mark_up(text: &str, spans: &[AnnotationSpan]) -> String {
    let mut chars: Vec<char> = text.chars().collect();
    let mut ordered = spans.to_vec();
    sort_for_application(&mut ordered);
    for span in &ordered {
        if span.end() > chars.len() {
            continue;
        }
        let (open, close) = markers(span);
        insert_str(&mut chars, span.end(), close);
        insert_str(&mut chars, span.position, open);
    }
    chars.into_iter().collect()
}

fn markers(span: &AnnotationSpan) -> (&'static str, &'static str) {
    match (span.length, span.kind) {
        (0, SpanKind::Short) => ("^", ""),
        (0, SpanKind::Long) => ("^^", ""),
        (_, SpanKind::Short) => ("[", "]"),
        (_, SpanKind::Long) => ("[[", "]]"),
    }
}

fn insert_str(chars: &mut Vec<char>, at: usize, s: &str) {
    for (k, c) in s.chars().enumerate() {
        chars.insert(at + k, c);
    }
}
