use std::ops::Index;
use std::slice;

use crate::question::Question;

const DEFAULT_CAPACITY: usize = 4;

/// An ordered collection of questions, the unit handed to a quiz runtime.
///
/// Order is insertion order and is the indexing order. Duplicate questions
/// are allowed. The bank only grows through [`QuestionBank::add`]; existing
/// entries change only through [`QuestionBank::set`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new() -> QuestionBank {
        QuestionBank::with_capacity(DEFAULT_CAPACITY)
    }

    /// `capacity` is a pre-sizing hint only; it never limits or truncates
    /// the bank.
    pub fn with_capacity(capacity: usize) -> QuestionBank {
        QuestionBank {
            questions: Vec::with_capacity(capacity),
        }
    }

    pub fn from_questions(questions: Vec<Question>) -> QuestionBank {
        QuestionBank { questions }
    }

    /// Appends a question at the end, preserving order.
    pub fn add(&mut self, question: Question) {
        self.questions.push(question);
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Question> {
        self.questions.get_mut(index)
    }

    /// Replaces the question at `index` in place.
    ///
    /// # Panics
    ///
    /// Panics if `index` is past the end of the bank.
    pub fn set(&mut self, index: usize, question: Question) {
        self.questions[index] = question;
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn iter(&self) -> slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl Default for QuestionBank {
    fn default() -> QuestionBank {
        QuestionBank::new()
    }
}

impl Index<usize> for QuestionBank {
    type Output = Question;

    fn index(&self, index: usize) -> &Question {
        &self.questions[index]
    }
}

impl IntoIterator for QuestionBank {
    type Item = Question;
    type IntoIter = std::vec::IntoIter<Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.into_iter()
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

impl FromIterator<Question> for QuestionBank {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> QuestionBank {
        QuestionBank {
            questions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Question> for QuestionBank {
    fn extend<I: IntoIterator<Item = Question>>(&mut self, iter: I) {
        self.questions.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::QuestionBank;
    use crate::answer::Answer;
    use crate::question::Question;

    fn question(text: &str) -> Question {
        Question::with_correct(text, Answer::new("yes"))
    }

    #[test]
    fn add_preserves_insertion_order() {
        let texts = ["one", "two", "three", "four", "five"];
        let mut bank = QuestionBank::new();
        for text in texts {
            bank.add(question(text));
        }

        assert_eq!(bank.len(), texts.len());
        for (index, text) in texts.into_iter().enumerate() {
            assert_eq!(bank[index], question(text));
        }
    }

    #[test]
    fn capacity_is_only_a_hint() {
        let mut bank = QuestionBank::with_capacity(1);
        bank.add(question("one"));
        bank.add(question("two"));
        assert_eq!(bank.len(), 2);

        assert!(QuestionBank::with_capacity(0).is_empty());
    }

    #[test]
    fn from_questions_keeps_the_supplied_questions() {
        let bank = QuestionBank::from_questions(vec![question("a"), question("b")]);
        assert_eq!(bank.len(), 2);
        assert_eq!(bank[0], question("a"));
        assert_eq!(bank[1], question("b"));
    }

    #[test]
    fn equality_is_element_wise_and_order_sensitive() {
        let ab = QuestionBank::from_questions(vec![question("a"), question("b")]);
        let ab_again = QuestionBank::from_questions(vec![question("a"), question("b")]);
        let ba = QuestionBank::from_questions(vec![question("b"), question("a")]);
        let a = QuestionBank::from_questions(vec![question("a")]);

        assert_eq!(ab, ab);
        assert_eq!(ab, ab_again);
        assert_eq!(ab_again, ab);
        assert_ne!(ab, ba);
        assert_ne!(ab, a);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut bank = QuestionBank::from_questions(vec![question("a"), question("b")]);
        bank.set(0, question("c"));
        assert_eq!(bank[0], question("c"));
        assert_eq!(bank[1], question("b"));
        assert_eq!(bank.len(), 2);

        // Replacing with an equal value is permitted and changes nothing.
        bank.set(1, question("b"));
        assert_eq!(bank[1], question("b"));
    }

    #[test]
    #[should_panic]
    fn set_past_the_end_panics() {
        QuestionBank::new().set(0, question("a"));
    }

    #[test]
    fn get_is_bounds_checked() {
        let bank = QuestionBank::from_questions(vec![question("a")]);
        assert_eq!(bank.get(0), Some(&question("a")));
        assert_eq!(bank.get(1), None);
    }

    #[test]
    fn iteration_is_restartable() {
        let bank = QuestionBank::from_questions(vec![question("a"), question("b")]);

        let first: Vec<_> = bank.iter().map(|q| q.text.as_str()).collect();
        let second: Vec<_> = bank.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(first, ["a", "b"]);
        assert_eq!(first, second);
    }

    #[test]
    fn collects_from_an_iterator() {
        let bank: QuestionBank = ["a", "b"].into_iter().map(question).collect();
        assert_eq!(
            bank,
            QuestionBank::from_questions(vec![question("a"), question("b")])
        );
    }
}
