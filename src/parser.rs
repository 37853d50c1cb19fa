//! Loads a question bank XML document into a validated [`QuestionBank`].
//!
//! The expected shape:
//!
//! ```xml
//! <QuestionBank>
//!   <Question>
//!     <Text>2+2?</Text>
//!     <ImageURI>sums.png</ImageURI>
//!     <Answer isCorrect="false">3</Answer>
//!     <Answer isCorrect="true">4</Answer>
//!   </Question>
//! </QuestionBank>
//! ```
//!
//! `ImageURI` is optional. Exactly one `Answer` per `Question` must carry
//! `isCorrect="true"`. Parsing is a single pass in document order; the first
//! violation aborts the whole load and no partial bank is returned.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, warn};
use roxmltree::{Document, Node};
use thiserror::Error;

use crate::answer::Answer;
use crate::bank::QuestionBank;
use crate::question::Question;

const QUESTION_TAG: &str = "Question";
const TEXT_TAG: &str = "Text";
const IMAGE_TAG: &str = "ImageURI";
const ANSWER_TAG: &str = "Answer";
const CORRECT_ATTR: &str = "isCorrect";

/// Everything that can go wrong while loading a question bank document.
///
/// `index` is the zero-based position of the offending `Question` element in
/// document order.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot read question bank file")]
    Io(#[from] io::Error),
    #[error("question bank document is not well-formed XML")]
    Xml(#[from] roxmltree::Error),
    #[error("question {index} has no `Text` element")]
    MalformedDocument { index: usize },
    #[error("question {index} ({text:?}) has no answer marked correct")]
    MissingCorrectAnswer { index: usize, text: String },
    #[error(
        "question {index} ({text:?}) has {count} answers marked correct, expected exactly one"
    )]
    AmbiguousCorrectAnswer {
        index: usize,
        text: String,
        count: usize,
    },
    #[error(
        "question {index} ({text:?}): marked-correct text {correct:?} does not \
         resolve to exactly one of its answers"
    )]
    UnresolvableCorrectAnswer {
        index: usize,
        text: String,
        correct: String,
    },
}

/// Reads a question bank file and parses it with [`parse_str`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<QuestionBank, ParseError> {
    let path = path.as_ref();
    debug!("[Parse] Reading question bank at {:?}", path);
    let xml = fs::read_to_string(path)?;
    parse_str(&xml)
}

/// Parses a question bank document, enforcing the single-correct-answer rule
/// on every question.
pub fn parse_str(xml: &str) -> Result<QuestionBank, ParseError> {
    let document = Document::parse(xml)?;

    let mut bank = QuestionBank::new();
    for (index, node) in document
        .descendants()
        .filter(|node| node.has_tag_name(QUESTION_TAG))
        .enumerate()
    {
        bank.add(parse_question(index, node)?);
    }

    debug!("[Parse] Loaded {} questions.", bank.len());
    Ok(bank)
}

fn parse_question(index: usize, node: Node<'_, '_>) -> Result<Question, ParseError> {
    let text = match child_text(node, TEXT_TAG) {
        Some(text) => text,
        None => {
            warn!("[Parse] Question {} has no `Text` element.", index);
            return Err(ParseError::MalformedDocument { index });
        }
    };

    let mut question = Question::new(text);
    question.image_uri = child_text(node, IMAGE_TAG);

    let mut marked_correct = Vec::new();
    for answer in node.children().filter(|child| child.has_tag_name(ANSWER_TAG)) {
        let answer_text = answer.text().unwrap_or_default().to_owned();
        if answer.attribute(CORRECT_ATTR) == Some("true") {
            marked_correct.push(answer_text.clone());
        }
        question.add_answer(Answer::new(answer_text));
    }

    let correct = match marked_correct.as_slice() {
        [one] => one.clone(),
        [] => {
            warn!("[Parse] Question {} has no answer marked correct.", index);
            return Err(ParseError::MissingCorrectAnswer {
                index,
                text: question.text,
            });
        }
        many => {
            warn!(
                "[Parse] Question {} has {} answers marked correct.",
                index,
                many.len()
            );
            return Err(ParseError::AmbiguousCorrectAnswer {
                index,
                text: question.text,
                count: many.len(),
            });
        }
    };

    // The correct answer must resolve to exactly one entry of the answer
    // list; duplicated answer text makes the marked one ambiguous.
    let mut resolved = question.answers.iter().filter(|a| a.text == correct);
    match (resolved.next(), resolved.next()) {
        (Some(answer), None) => question.correct_answer = Some(answer.clone()),
        _ => {
            warn!(
                "[Parse] Question {} cannot resolve correct answer {:?}.",
                index, correct
            );
            return Err(ParseError::UnresolvableCorrectAnswer {
                index,
                text: question.text,
                correct,
            });
        }
    }

    Ok(question)
}

fn child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    node.children()
        .find(|child| child.has_tag_name(tag))
        .map(|child| child.text().unwrap_or_default().to_owned())
}
