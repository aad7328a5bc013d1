//! Question builders shared by unit tests.

use crate::types::{Question, QuestionOption};

pub fn question(text: &str, options: &[(&str, bool)]) -> Question {
    Question {
        text: text.to_string(),
        options: options
            .iter()
            .map(|(text, is_correct)| QuestionOption::new(*text, *is_correct))
            .collect(),
        raw: text.to_string(),
    }
}

pub fn capital_of_france() -> Question {
    question(
        "ما عاصمة فرنسا؟",
        &[
            ("باريس", true),
            ("لندن", false),
            ("برلين", false),
            ("روما", false),
        ],
    )
}

pub fn capital_of_egypt() -> Question {
    question(
        "ما عاصمة مصر؟",
        &[
            ("القاهرة", true),
            ("الرياض", false),
            ("عمان", false),
            ("بغداد", false),
        ],
    )
}
