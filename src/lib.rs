//! 問題集 (Mondaishū): the quiz content model — answers, questions and the
//! question bank — plus the XML loader that turns a question bank document
//! into a validated in-memory bank.

pub mod answer;
pub mod bank;
pub mod parser;
pub mod question;

pub use answer::Answer;
pub use bank::QuestionBank;
pub use parser::{parse_file, parse_str, ParseError};
pub use question::Question;
