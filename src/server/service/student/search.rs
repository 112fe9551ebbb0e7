//! Classification of the raw search box input into a store filter.

/// Number of digits in a student ID
pub const STUDENT_ID_LEN: usize = 8;

/// What a search term asks the record store for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StudentFilter {
    /// Every record
    All,
    /// The record holding exactly this student ID
    ByStudentId(String),
    /// No records; partial numeric input never partially matches a student ID
    Nothing,
    /// Records whose name or major contains the term, ignoring case, taken literally
    NameOrMajor(String),
}

/// Classifies an already trimmed search term.
///
/// - empty → [`StudentFilter::All`]
/// - exactly 8 ASCII digits → [`StudentFilter::ByStudentId`]
/// - any other all-digit string → [`StudentFilter::Nothing`]
/// - anything else → [`StudentFilter::NameOrMajor`]
pub fn classify(term: &str) -> StudentFilter {
    if term.is_empty() {
        return StudentFilter::All;
    }

    if term.bytes().all(|b| b.is_ascii_digit()) {
        return if term.len() == STUDENT_ID_LEN {
            StudentFilter::ByStudentId(term.to_string())
        } else {
            StudentFilter::Nothing
        };
    }

    StudentFilter::NameOrMajor(term.to_string())
}
