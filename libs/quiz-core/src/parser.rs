//! Parser for `==` delimited question blocks.
//!
//! # Format
//! ```text
//! ==
//! ما عاصمة فرنسا؟
//!
//! باريس*
//! لندن
//! برلين
//! ==
//! Another question
//!
//! option
//! correct option*
//! ```
//!
//! The first non-blank line of a block is the question text, every following
//! non-blank line is an option, and a trailing `*` marks the correct one.
//! There is no escape syntax for a literal trailing `*` or an embedded `==`.

use crate::types::{Question, QuestionOption};

const BLOCK_DELIMITER: &str = "==";
const CORRECT_MARKER: char = '*';

/// Parse raw text into questions.
///
/// Never fails: blocks with fewer than two non-blank lines become a
/// question whose text is the whole trimmed block and which has no options.
pub fn parse(input: &str) -> Vec<Question> {
    if input.trim().is_empty() {
        return vec![];
    }

    input
        .split(BLOCK_DELIMITER)
        .filter(|section| !section.trim().is_empty())
        .map(parse_block)
        .collect()
}

fn parse_block(section: &str) -> Question {
    let raw = section.trim().to_string();
    let lines: Vec<&str> = section
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 2 {
        return Question {
            text: raw.clone(),
            options: vec![],
            raw,
        };
    }

    Question {
        text: lines[0].to_string(),
        options: lines[1..].iter().map(|line| parse_option(line)).collect(),
        raw,
    }
}

fn parse_option(line: &str) -> QuestionOption {
    match line.strip_suffix(CORRECT_MARKER) {
        Some(text) => QuestionOption::new(text.trim(), true),
        None => QuestionOption::new(line, false),
    }
}

/// Serialize questions back into the block format accepted by [`parse`].
pub fn serialize(questions: &[Question]) -> String {
    questions
        .iter()
        .map(|question| {
            let options = question
                .options
                .iter()
                .map(|opt| {
                    if opt.is_correct {
                        format!("{}{}", opt.text, CORRECT_MARKER)
                    } else {
                        opt.text.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");

            format!("{BLOCK_DELIMITER}\n{}\n\n{options}\n", question.text)
        })
        .collect()
}
