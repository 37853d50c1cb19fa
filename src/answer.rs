use std::fmt;

/// One candidate response to a question, compared by its text.
///
/// Answers are plain text values. Equality, ordering and hashing all follow
/// the text byte-for-byte; no trimming or normalization is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Answer {
    pub text: String,
}

impl Answer {
    pub fn new(text: impl Into<String>) -> Answer {
        Answer { text: text.into() }
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Answer {
        Answer::new(text)
    }
}

impl From<String> for Answer {
    fn from(text: String) -> Answer {
        Answer::new(text)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
