//! Assignment records and the course-grade average.
//!
//! The gradebook owns the committed records plus the two draft buffers the
//! form edits. Everything the screen shows about grades is read from here.

use thiserror::Error;

/// Identifier handed out once per record, used only for list identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One named grade entry
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentRecord {
    pub id: RecordId,
    /// Stored exactly as typed (only the emptiness check trims)
    pub title: String,
    /// Finite and non-negative, never clamped to 100
    pub grade: f64,
}

impl AssignmentRecord {
    /// List line: `"{title}: {grade}%"`
    pub fn display_line(&self) -> String {
        format!("{}: {}%", self.title, self.grade)
    }
}

/// Validation failures reported back to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GradebookError {
    #[error("Assignment name cannot be empty.")]
    EmptyTitle,
    #[error("Please enter a valid grade.")]
    InvalidGrade,
    #[error("No assignments entered to calculate the grade.")]
    NoAssignments,
}

impl GradebookError {
    /// Title of the alert this error is shown in
    pub fn alert_title(&self) -> &'static str {
        "Error"
    }
}

/// Parse grade text into a finite, non-negative value.
///
/// Surrounding whitespace is ignored. Empty text, anything that is not a
/// decimal number (including `inf`/`NaN` spellings) and negative values are
/// rejected.
pub fn parse_grade(text: &str) -> Result<f64, GradebookError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GradebookError::InvalidGrade);
    }

    let value: f64 = text.parse().map_err(|_| GradebookError::InvalidGrade)?;
    if !value.is_finite() || value < 0.0 {
        return Err(GradebookError::InvalidGrade);
    }

    // Fold -0 into 0 so it never renders as "-0%"
    Ok(value + 0.0)
}

/// The whole screen's data: records, draft buffers and the theme flag
#[derive(Debug, Default)]
pub struct Gradebook {
    records: Vec<AssignmentRecord>,
    draft_title: String,
    draft_grade: String,
    dark_mode: bool,
    next_id: u64,
}

impl Gradebook {
    #[allow(dead_code)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the display toggle already set
    pub fn with_dark_mode(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Self::default()
        }
    }

    /// Committed records in insertion order
    pub fn records(&self) -> &[AssignmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn draft_title(&self) -> &str {
        &self.draft_title
    }

    pub fn draft_grade(&self) -> &str {
        &self.draft_grade
    }

    pub fn draft_title_mut(&mut self) -> &mut String {
        &mut self.draft_title
    }

    pub fn draft_grade_mut(&mut self) -> &mut String {
        &mut self.draft_grade
    }

    #[allow(dead_code)] // Used in tests
    pub fn set_drafts(&mut self, title: impl Into<String>, grade: impl Into<String>) {
        self.draft_title = title.into();
        self.draft_grade = grade.into();
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Commit the draft buffers as a new record.
    ///
    /// The title is checked before the grade. On failure nothing changes,
    /// drafts included, so the user can correct the input.
    pub fn add_assignment(&mut self) -> Result<&AssignmentRecord, GradebookError> {
        if self.draft_title.trim().is_empty() {
            tracing::debug!("Rejected assignment: empty title");
            return Err(GradebookError::EmptyTitle);
        }

        let grade = parse_grade(&self.draft_grade).inspect_err(|_| {
            tracing::debug!("Rejected assignment: invalid grade {:?}", self.draft_grade);
        })?;

        let id = RecordId(self.next_id);
        self.next_id += 1;

        let title = std::mem::take(&mut self.draft_title);
        self.draft_grade.clear();

        tracing::debug!("Added assignment {} with grade {}", id, grade);
        self.records.push(AssignmentRecord { id, title, grade });

        Ok(&self.records[self.records.len() - 1])
    }

    /// Unweighted mean of all grades, unrounded
    pub fn calculate_grade(&self) -> Result<f64, GradebookError> {
        if self.records.is_empty() {
            return Err(GradebookError::NoAssignments);
        }

        let total: f64 = self.records.iter().map(|r| r.grade).sum();
        let average = total / self.records.len() as f64;
        tracing::debug!(
            "Course grade over {} assignments: {}",
            self.records.len(),
            average
        );
        Ok(average)
    }

    /// Drop every record and both drafts. Ids keep counting up.
    pub fn clear_assignments(&mut self) {
        tracing::debug!("Cleared {} assignments", self.records.len());
        self.records.clear();
        self.draft_title.clear();
        self.draft_grade.clear();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        tracing::debug!("Dark mode: {}", self.dark_mode);
    }
}

/// Course-grade message shown after a successful calculation
pub fn course_grade_message(average: f64, decimals: usize) -> String {
    format!("Your course grade is {:.*}%", decimals, average)
}
