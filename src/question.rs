use std::fmt;

use crate::answer::Answer;

/// A question: prompt text, an optional image, the candidate answers in
/// presentation order, and the designated correct answer.
///
/// A question without a correct answer is a transitional "under construction"
/// state. The loader only ever produces questions whose correct answer is one
/// of `answers`; nothing in this type enforces that for questions built by
/// hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    pub image_uri: Option<String>,
    pub text: String,
    pub answers: Vec<Answer>,
    pub correct_answer: Option<Answer>,
}

impl Question {
    /// A question with no image, no candidates and no correct answer yet.
    pub fn new(text: impl Into<String>) -> Question {
        Question {
            image_uri: None,
            text: text.into(),
            answers: Vec::new(),
            correct_answer: None,
        }
    }

    pub fn with_correct(text: impl Into<String>, correct: Answer) -> Question {
        Question {
            correct_answer: Some(correct),
            ..Question::new(text)
        }
    }

    /// The canonical full form: image, text and correct answer.
    pub fn with_image(
        image_uri: impl Into<String>,
        text: impl Into<String>,
        correct: Answer,
    ) -> Question {
        Question {
            image_uri: Some(image_uri.into()),
            ..Question::with_correct(text, correct)
        }
    }

    /// Appends a candidate answer, preserving insertion order.
    pub fn add_answer(&mut self, answer: Answer) {
        self.answers.push(answer);
    }

    /// True iff `candidate` matches the correct answer by text. A question
    /// with no correct answer set matches nothing.
    pub fn is_guess_correct(&self, candidate: &Answer) -> bool {
        self.correct_answer.as_ref() == Some(candidate)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
