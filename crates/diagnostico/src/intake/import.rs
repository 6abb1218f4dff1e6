use super::validation::{self, validate};
use super::IntakeError;
use crate::diagnosis::{BusinessInput, CreditorCategory, CrisisSeverity, UnknownCategory};
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug)]
pub enum LeadImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for LeadImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadImportError::Io(err) => write!(f, "failed to read lead export: {}", err),
            LeadImportError::Csv(err) => write!(f, "invalid lead CSV data: {}", err),
        }
    }
}

impl std::error::Error for LeadImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LeadImportError::Io(err) => Some(err),
            LeadImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LeadImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for LeadImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reason a single CSV row could not become an engine input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LeadRowError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Category(#[from] UnknownCategory),
    #[error("column {column}: '{value}' is not a monetary amount")]
    Amount { column: &'static str, value: String },
}

/// One row of a lead export; a bad row never aborts the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedLead {
    /// 1-based line in the source file, header included.
    pub line: u64,
    pub outcome: Result<BusinessInput, LeadRowError>,
}

pub struct LeadImporter;

impl LeadImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedLead>, LeadImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ImportedLead>, LeadImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut leads = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            // Quoted fields may span lines, so the row index is not the line.
            let line = record.position().map_or(0, |position| position.line());
            let row: LeadRow = record.deserialize(Some(&headers))?;
            let outcome = row.into_input();
            match &outcome {
                Ok(_) => debug!(line, "lead row imported"),
                Err(err) => warn!(line, error = %err, "lead row rejected"),
            }
            leads.push(ImportedLead { line, outcome });
        }

        Ok(leads)
    }
}

#[derive(Debug, Deserialize)]
struct LeadRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    company_name: Option<String>,
    monthly_revenue: String,
    total_debt: String,
    monthly_fixed_costs: String,
    debt_service_cost: String,
    main_creditor: String,
    crisis_level: String,
}

impl LeadRow {
    fn into_input(self) -> Result<BusinessInput, LeadRowError> {
        let input = BusinessInput {
            company_name: self.company_name,
            monthly_revenue: parse_amount("monthly_revenue", &self.monthly_revenue)?,
            total_debt: parse_amount("total_debt", &self.total_debt)?,
            monthly_fixed_costs: parse_amount("monthly_fixed_costs", &self.monthly_fixed_costs)?,
            debt_service_cost: parse_amount("debt_service_cost", &self.debt_service_cost)?,
            main_creditor: self.main_creditor.parse::<CreditorCategory>()?,
            crisis_level: self.crisis_level.parse::<CrisisSeverity>()?,
        };
        validate(&input)?;
        Ok(input)
    }
}

fn parse_amount(column: &'static str, raw: &str) -> Result<f64, LeadRowError> {
    validation::parse_amount(raw).ok_or_else(|| LeadRowError::Amount {
        column,
        value: raw.trim().to_string(),
    })
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
