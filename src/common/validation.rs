// Common validation types shared by every strategy

use serde::Serialize;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Accumulated outcome of one or more validation passes.
///
/// Errors block acceptance of a record, warnings are advisory only.
/// The validity flag is false as soon as any error has been added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Records a blocking error. The message is stored verbatim, empty strings included.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.is_valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Merges two results into a new one, `self` first.
    ///
    /// Neither operand is modified.
    pub fn combine(&self, other: &ValidationResult) -> ValidationResult {
        let mut errors = Vec::with_capacity(self.errors.len() + other.errors.len());
        errors.extend(self.errors.iter().cloned());
        errors.extend(other.errors.iter().cloned());

        let mut warnings = Vec::with_capacity(self.warnings.len() + other.warnings.len());
        warnings.extend(self.warnings.iter().cloned());
        warnings.extend(other.warnings.iter().cloned());

        ValidationResult {
            is_valid: self.is_valid && other.is_valid,
            errors,
            warnings,
        }
    }

    /// Renders errors and warnings as an indented block for display.
    ///
    /// # Example
    /// ```
    /// use equipment_tracker::ValidationResult;
    ///
    /// let mut result = ValidationResult::new();
    /// result.add_error("Serial number is required");
    /// let text = result.formatted_messages();
    /// assert!(text.starts_with("Errors:"));
    /// assert!(text.ends_with("  - Serial number is required"));
    /// ```
    pub fn formatted_messages(&self) -> String {
        let mut lines = Vec::new();

        if !self.errors.is_empty() {
            lines.push("Errors:".to_string());
            lines.extend(self.errors.iter().map(|e| format!("  - {}", e)));
        }

        if !self.warnings.is_empty() {
            lines.push("Warnings:".to_string());
            lines.extend(self.warnings.iter().map(|w| format!("  - {}", w)));
        }

        lines.join(LINE_ENDING)
    }
}
