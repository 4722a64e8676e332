//! Tutorial description format parser.
//!
//! The format is line oriented. An optional header block sets metadata for the
//! whole tutorial and numbered step blocks carry the per-step properties:
//!
//! ```text
//! TutorialProperties [
//!     TutorialName: Blinky;
//!     Author: Ada;
//! ]
//! 1 {
//!     StepTitle: Hello;
//!     Contents: Make the
//!         display blink;
//! }
//! ```
//!
//! Each property value runs until a line whose accumulated value ends in `;`,
//! so long values may wrap over several physical lines. The parser returns the
//! steps as one fully linked run, with slugs derived from the tutorial name.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde_json::Value;

use crate::{
    doctree::DocumentTree,
    error::FormatError,
    models::{slugify, Platform, StepRecord, TutorialMeta, UNSET},
};

const HEADER_KEYWORD: &str = "TutorialProperties";

/// Which kind of block the current line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Outside,
    Header,
    /// Number of the step being filled
    Step(usize),
}

/// One `Name: value;` line (or group of lines).
#[derive(Debug)]
struct Property {
    name: String,
    value: String,
    /// 1-based line the property started on
    line: usize,
}

/// Line-oriented parser for the tutorial description format.
///
/// The header metadata acts as a running default: header properties apply to
/// every step parsed so far and to every step opened afterwards.
#[derive(Debug, Default)]
pub struct Parser {
    meta: TutorialMeta,
    steps: BTreeMap<usize, StepRecord>,
}

/// Parses a tutorial description into a linked run.
///
/// # Examples
///
/// ```rust
/// use tutor_core::parser::parse;
///
/// let text = "TutorialProperties [\n    TutorialName: Blinky;\n]\n1 {\n    StepTitle: Hi;\n}\n";
/// let steps = parse(text).unwrap();
/// assert_eq!(steps[0].slug, "blinky-1");
/// assert_eq!(steps[0].step_title, "Hi");
/// ```
pub fn parse(text: &str) -> Result<Vec<StepRecord>, FormatError> {
    Parser::default().parse(text)
}

impl Parser {
    /// Consumes the parser and returns the linked steps.
    pub fn parse(mut self, text: &str) -> Result<Vec<StepRecord>, FormatError> {
        let lines: Vec<&str> = text.lines().collect();
        let mut block = Block::Outside;
        let mut idx = 0;

        while idx < lines.len() {
            let line_num = idx + 1;
            let line = lines[idx].trim();

            block = match block {
                Block::Outside => {
                    if line.is_empty() {
                        Block::Outside
                    } else {
                        self.open_block(line, line_num)?
                    }
                }
                Block::Header if line == "]" => Block::Outside,
                Block::Step(_) if line == "}" => Block::Outside,
                Block::Header | Block::Step(_) if line.is_empty() => block,
                Block::Header => {
                    let (property, last) = read_property(&lines, idx)?;
                    idx = last;
                    self.set_header_property(property);
                    Block::Header
                }
                Block::Step(number) => {
                    let (property, last) = read_property(&lines, idx)?;
                    idx = last;
                    self.set_step_property(number, property)?;
                    Block::Step(number)
                }
            };

            idx += 1;
        }

        if block != Block::Outside {
            debug!("Input ended inside an open block");
        }

        Ok(self.link())
    }

    /// Handles a line outside any block, which must open one.
    fn open_block(&mut self, line: &str, line_num: usize) -> Result<Block, FormatError> {
        let opener = match line.chars().last() {
            Some(c @ ('{' | '[')) => c,
            _ => {
                return Err(FormatError::new(
                    line_num,
                    "Line outside of a block does not begin a block",
                ))
            }
        };

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 2 || parts[1].len() != 1 {
            return Err(FormatError::new(line_num, "Malformed block beginning"));
        }

        if parts[0] == HEADER_KEYWORD || opener == '[' {
            if parts[0] != HEADER_KEYWORD || opener != '[' {
                return Err(FormatError::new(
                    line_num,
                    format!("Expected properties block beginning '{HEADER_KEYWORD} ['"),
                ));
            }
            return Ok(Block::Header);
        }

        let number = match parts[0].parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                return Err(FormatError::new(
                    line_num,
                    format!(
                        "Step block must begin with a positive integer, found '{}'",
                        parts[0]
                    ),
                ))
            }
        };

        let step = StepRecord::new(format!("step-{number}"), &self.meta, UNSET, "");
        if self.steps.insert(number, step).is_some() {
            warn!("Step {number} is defined more than once; keeping the block at line {line_num}");
        }

        Ok(Block::Step(number))
    }

    fn set_header_property(&mut self, property: Property) {
        let Property { name, value, line } = property;
        match name.as_str() {
            "TutorialName" => self.meta.name = value.clone(),
            "Author" => self.meta.author = value.clone(),
            "Icon" => self.meta.icon = value.clone(),
            _ => {
                debug!("Ignoring unknown header property '{name}' at line {line}");
                return;
            }
        }

        for step in self.steps.values_mut() {
            apply_meta_property(step, &name, &value);
        }
    }

    fn set_step_property(&mut self, number: usize, property: Property) -> Result<(), FormatError> {
        let Some(step) = self.steps.get_mut(&number) else {
            return Ok(());
        };
        let Property { name, value, line } = property;

        match name.as_str() {
            "StepTitle" => step.step_title = value,
            "Contents" => step.content = value,
            "ContentsJSON" => step.rich_content = Some(parse_document(&value, line)?),
            "Hint" => step.hint = Some(value),
            "Compatibility" => {
                step.compatibility = Platform::parse_set(&value)
                    .map_err(|e| FormatError::new(line, format!("Invalid Compatibility: {e}")))?;
            }
            "TutorialName" | "Author" | "Icon" => apply_meta_property(step, &name, &value),
            _ => debug!("Ignoring unknown step property '{name}' at line {line}"),
        }
        Ok(())
    }

    /// Orders the steps by number and links adjacent ones, replacing any slug,
    /// id or link set while reading the blocks.
    fn link(self) -> Vec<StepRecord> {
        let highest = self.steps.keys().next_back().copied().unwrap_or(0);
        let mut steps: Vec<StepRecord> = self.steps.into_values().collect();
        if steps.len() != highest {
            warn!(
                "Step numbers have gaps; compacting {} steps into positions 1 to {}",
                steps.len(),
                steps.len()
            );
        }

        let base = slugify(&self.meta.name);
        let slugs: Vec<String> = (1..=steps.len()).map(|n| format!("{base}-{n}")).collect();

        for (i, step) in steps.iter_mut().enumerate() {
            step.slug = slugs[i].clone();
            step.id = slugs[i].clone();
            step.prev = i.checked_sub(1).map(|p| slugs[p].clone());
            step.next = slugs.get(i + 1).cloned();
        }

        debug!("Parsed {} steps for tutorial '{}'", steps.len(), self.meta.name);
        steps
    }
}

fn apply_meta_property(step: &mut StepRecord, name: &str, value: &str) {
    match name {
        "TutorialName" => step.tutorial_name = value.to_string(),
        "Author" => step.author = value.to_string(),
        "Icon" => step.icon = value.to_string(),
        _ => {}
    }
}

fn parse_document(raw: &str, line: usize) -> Result<Value, FormatError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| FormatError::new(line, format!("Invalid ContentsJSON: {e}")))?;
    DocumentTree::from_value(&value)
        .map_err(|e| FormatError::new(line, format!("Invalid ContentsJSON: {e}")))?;
    Ok(value)
}

/// Reads the property starting at `start`, following continuation lines.
///
/// Returns the property and the index of the last line it consumed.
fn read_property(lines: &[&str], start: usize) -> Result<(Property, usize), FormatError> {
    let line_num = start + 1;
    let Some((name, rest)) = lines[start].trim().split_once(':') else {
        return Err(FormatError::new(
            line_num,
            "Block contains a line that is not a property",
        ));
    };
    let name = name.trim().to_string();
    let mut value = rest.trim().to_string();

    let mut last = start;
    while !value.ends_with(';') {
        last += 1;
        let Some(next) = lines.get(last) else {
            return Err(FormatError::new(
                line_num,
                format!("Unterminated property '{name}': no ';' before end of file"),
            ));
        };
        let fragment = next.trim();
        if fragment.is_empty() {
            continue;
        }
        if !value.is_empty() {
            value.push(' ');
        }
        value.push_str(fragment);
    }

    value.pop();
    let value = value.trim_end().to_string();
    Ok((
        Property {
            name,
            value,
            line: line_num,
        },
        last,
    ))
}
