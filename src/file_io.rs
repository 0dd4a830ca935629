use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::debug;

use crate::error::{HpoError, Result};
use crate::structs::Term;

const TERM_STANZA: &str = "[Term]";

pub fn read_obo_file(filename: &Path) -> Result<Vec<Term>> {
    let file = File::open(filename)?;
    let terms = parse_obo(BufReader::new(file))?;
    debug!(path = %filename.display(), terms = terms.len(), "parsed obo file");
    Ok(terms)
}

/// Parses `[Term]` stanzas into records. Header lines and other stanzas
/// (`[Typedef]`, `[Instance]`) are skipped.
pub fn parse_obo<R: BufRead>(reader: R) -> Result<Vec<Term>> {
    let mut terms = Vec::new();
    let mut current: Option<TermBlock> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            if let Some(block) = current.take() {
                terms.push(block.finish()?);
            }
            if line == TERM_STANZA {
                current = Some(TermBlock::new(line_no));
            }
            continue;
        }

        let Some(block) = current.as_mut() else {
            continue;
        };
        let (key, value) = split_tag_value(line).ok_or_else(|| HpoError::MalformedSource {
            line: line_no,
            content: line.to_string(),
        })?;

        match key {
            "id" => block.id = Some(value.to_string()),
            "name" => block.name = Some(value.to_string()),
            "def" => {
                let def = quoted_text(value).ok_or_else(|| HpoError::MalformedSource {
                    line: line_no,
                    content: line.to_string(),
                })?;
                block.def = Some(def);
            }
            "alt_id" | "is_a" => {
                let id = if key == "is_a" {
                    strip_comment(value)
                } else {
                    value.trim()
                };
                if id.is_empty() {
                    return Err(HpoError::MalformedSource {
                        line: line_no,
                        content: line.to_string(),
                    });
                }
                if key == "is_a" {
                    block.parents.push(id.to_string());
                } else {
                    block.alt_ids.push(id.to_string());
                }
            }
            _ => {}
        }
    }

    if let Some(block) = current.take() {
        terms.push(block.finish()?);
    }
    Ok(terms)
}

struct TermBlock {
    start_line: usize,
    id: Option<String>,
    name: Option<String>,
    def: Option<String>,
    alt_ids: Vec<String>,
    parents: Vec<String>,
}

impl TermBlock {
    fn new(start_line: usize) -> TermBlock {
        TermBlock {
            start_line,
            id: None,
            name: None,
            def: None,
            alt_ids: Vec::new(),
            parents: Vec::new(),
        }
    }

    fn finish(self) -> Result<Term> {
        let missing = |field: &str| {
            HpoError::InvalidArgument(format!(
                "term block starting at line {} has no {}",
                self.start_line, field
            ))
        };
        let id = self.id.clone().ok_or_else(|| missing("id"))?;
        let name = self.name.clone().ok_or_else(|| missing("name"))?;
        Ok(Term {
            id,
            name,
            def: self.def,
            alt_ids: self.alt_ids,
            parents: self.parents,
        })
    }
}

fn split_tag_value(line: &str) -> Option<(&str, &str)> {
    let (key, rest) = line.split_once(':')?;
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }
    Some((key, rest.strip_prefix(' ').unwrap_or(rest)))
}

// `HP:0000118 ! Phenotypic abnormality` -> `HP:0000118`
fn strip_comment(value: &str) -> &str {
    value.split('!').next().unwrap_or(value).trim()
}

/// First double-quoted substring, honouring `\"` and `\\` escapes.
fn quoted_text(value: &str) -> Option<String> {
    let start = value.find('"')?;
    let mut text = String::new();
    let mut chars = value[start + 1..].chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Some(text),
            '\\' => match chars.next()? {
                escaped @ ('"' | '\\') => text.push(escaped),
                other => {
                    text.push('\\');
                    text.push(other);
                }
            },
            _ => text.push(c),
        }
    }
    None
}
