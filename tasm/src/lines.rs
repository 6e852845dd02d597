//! Line discipline: routes each source line to a section directive, a
//! label declaration or a statement, enforcing the tab-significance
//! rules. Both passes classify every line the same way, which is what
//! keeps pass-one addresses and pass-two emit offsets in lockstep.

use matches::debug_assert_matches;
use pest::iterators::Pair;
use pest::Span;

use crate::{new_parser_error, Result, Rule};

/// Longest accepted label name.
const MAX_LABEL_BYTES: usize = 256;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Code,
    Data,
}

pub enum Line<'i> {
    Blank,
    Directive(Section),
    Label {
        name: &'i str,
        span: Span<'i>,
    },
    Statement {
        tokens: Vec<Pair<'i, Rule>>,
        text: &'i str,
        span: Span<'i>,
    },
}

/// Strips the comment and trailing whitespace.
fn trim_line(raw: &str) -> &str {
    let uncommented = match raw.find(';') {
        Some(index) => &raw[..index],
        None => raw,
    };
    uncommented.trim_end()
}

pub fn is_valid_label_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validates a label declaration: `:name` followed by nothing but
/// whitespace.
fn label_name<'i>(ptr: &'i str, span: Span<'i>) -> Result<&'i str> {
    let body = &ptr[1..];
    let end = body
        .char_indices()
        .find(|&(_, c)| !(c.is_ascii_alphanumeric() || c == '_'))
        .map(|(index, _)| index)
        .unwrap_or_else(|| body.len());
    let (name, rest) = body.split_at(end);

    if !is_valid_label_name(name) {
        return Err(new_parser_error(span, "Invalid label name".to_owned()));
    }
    if name.len() > MAX_LABEL_BYTES {
        return Err(new_parser_error(span, "Label name too long".to_owned()));
    }
    if !rest.chars().all(char::is_whitespace) {
        return Err(new_parser_error(
            span,
            "Label must be alone on its line".to_owned(),
        ));
    }
    Ok(name)
}

pub fn classify(line: Pair<Rule>) -> Result<Line> {
    debug_assert_matches!(line.as_rule(), Rule::line);

    let span = line.as_span();
    let raw = span.as_str();

    // Tabs are the only permitted leading whitespace, on any kind of line.
    if raw.starts_with(' ') {
        return Err(new_parser_error(span, "Leading spaces are invalid".to_owned()));
    }

    let ptr = trim_line(raw).trim_start();
    if ptr.is_empty() {
        return Ok(Line::Blank);
    }

    if ptr.starts_with(".code") {
        return Ok(Line::Directive(Section::Code));
    }
    if ptr.starts_with(".data") {
        return Ok(Line::Directive(Section::Data));
    }

    if ptr.starts_with(':') {
        let name = label_name(ptr, span.clone())?;
        return Ok(Line::Label { name, span });
    }

    // Labels and directives may start at column 0; statements may not.
    if !raw.starts_with('\t') {
        return Err(new_parser_error(
            span,
            "Statement must begin with a tab".to_owned(),
        ));
    }

    let tokens = line
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::token)
        .collect();

    Ok(Line::Statement {
        tokens,
        text: ptr,
        span,
    })
}
