//! Export configuration
//!
//! Process-wide settings are passed to the factory as one immutable value.

use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{DateFormat, FiscalCalendar};

use crate::error::ExportError;

/// Settings shared by every batch built in a process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ExportConfig {
    /// Application name used in journal descriptions
    #[validate(length(min = 1, message = "app name must not be empty"))]
    pub app_name: String,
    /// First calendar month of the fiscal year
    #[validate(range(min = 1, max = 12, message = "fiscal start month must be 1-12"))]
    pub fiscal_start_month: u32,
    /// chrono strftime pattern for statement dates
    pub display_date_format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            app_name: "CoverApp".to_string(),
            fiscal_start_month: 1,
            display_date_format: DateFormat::DEFAULT_PATTERN.to_string(),
        }
    }
}

impl ExportConfig {
    pub fn new(
        app_name: impl Into<String>,
        fiscal_start_month: u32,
        display_date_format: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            fiscal_start_month,
            display_date_format: display_date_format.into(),
        }
    }

    /// Validates every field and returns the parsed calendar and date format
    ///
    /// # Errors
    ///
    /// Returns `ExportError::InvalidConfiguration` for field violations and
    /// `ExportError::Calendar` for an unrenderable date pattern
    pub fn resolve(&self) -> Result<(FiscalCalendar, DateFormat), ExportError> {
        self.validate()?;
        let calendar = FiscalCalendar::new(self.fiscal_start_month)?;
        let date_format = DateFormat::new(self.display_date_format.clone())?;
        Ok((calendar, date_format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolves() {
        let (calendar, format) = ExportConfig::default().resolve().unwrap();
        assert_eq!(calendar.start_month(), 1);
        assert_eq!(format.pattern(), "%m/%d/%Y");
    }

    #[test]
    fn test_rejects_bad_month() {
        let config = ExportConfig::new("CoverApp", 13, "%m/%d/%Y");
        assert!(matches!(config.resolve(), Err(ExportError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_rejects_empty_app_name() {
        let config = ExportConfig::new("", 1, "%m/%d/%Y");
        assert!(matches!(config.resolve(), Err(ExportError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_rejects_bad_date_pattern() {
        let config = ExportConfig::new("CoverApp", 1, "%Q");
        assert!(matches!(config.resolve(), Err(ExportError::Calendar(_))));

        let config = ExportConfig::new("CoverApp", 1, "%m/%d/%Y %H:%M");
        assert!(matches!(config.resolve(), Err(ExportError::Calendar(_))));
    }
}
