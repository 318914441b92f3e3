//! Batch construction
//!
//! The factory turns a destination identifier and a run date into an empty
//! batch stamped with fiscal period, year and journal description.

use chrono::{Datelike, NaiveDate};

use core_kernel::{month_year, DateFormat, FiscalCalendar};

use crate::batch::Batch;
use crate::config::ExportConfig;
use crate::destination::Destination;
use crate::error::ExportError;
use crate::ledger::JournalHeader;

/// Builds batches from a validated configuration
#[derive(Debug, Clone)]
pub struct BatchFactory {
    app_name: String,
    calendar: FiscalCalendar,
    date_format: DateFormat,
}

impl BatchFactory {
    /// Creates a factory, validating the configuration up front
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid; this is an operator
    /// misconfiguration and should abort the export run.
    pub fn new(config: &ExportConfig) -> Result<Self, ExportError> {
        let (calendar, date_format) = config.resolve()?;
        Ok(Self {
            app_name: config.app_name.clone(),
            calendar,
            date_format,
        })
    }

    pub fn calendar(&self) -> FiscalCalendar {
        self.calendar
    }

    /// Fiscal metadata for a run on `reference_date`
    ///
    /// The year is the reference date's calendar year.
    pub fn journal_header(&self, reference_date: NaiveDate) -> JournalHeader {
        JournalHeader::new(
            self.calendar.period_of(reference_date),
            reference_date.year(),
            format!("{} {} JE", month_year(reference_date), self.app_name),
        )
    }

    /// Creates an empty batch for a destination identifier
    ///
    /// # Errors
    ///
    /// Returns `ExportError::UnsupportedDestination` for an unknown identifier
    pub fn new_batch(&self, destination: &str, reference_date: NaiveDate) -> Result<Batch, ExportError> {
        let destination: Destination = destination.parse()?;
        Ok(self.batch_for(destination, reference_date))
    }

    /// Creates an empty batch for a parsed destination
    pub fn batch_for(&self, destination: Destination, reference_date: NaiveDate) -> Batch {
        let header = self.journal_header(reference_date);
        tracing::info!(
            %destination,
            period = header.period,
            year = header.year,
            journal = %header.journal_description,
            "created export batch"
        );
        Batch::new(destination, header, self.date_format.clone())
    }
}
