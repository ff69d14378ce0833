// Answer grading: concept extraction, concept matching, scoring, feedback.
// Pure functions throughout; the HTTP surface lives in `handlers`.

pub mod concepts;
pub mod feedback;
pub mod handlers;
pub mod matcher;
pub mod scorer;
