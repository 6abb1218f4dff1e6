use crate::render::{render_batch, render_report, BatchEntry, BatchOutcome};
use chrono::Utc;
use clap::{Args, ValueEnum};
use diagnostico::config::AppConfig;
use diagnostico::diagnosis::{BusinessInput, CreditorCategory, CrisisSeverity, UnknownCategory};
use diagnostico::error::AppError;
use diagnostico::intake::{parse_amount, LeadImporter, LeadSubmission};
use diagnostico::report::DiagnosisReport;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Default)]
pub(crate) struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
    /// Skip the simulated processing pause
    #[arg(long)]
    pub(crate) no_delay: bool,
    /// Include the score components behind the viability score
    #[arg(long)]
    pub(crate) breakdown: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DiagnoseArgs {
    /// Company name (optional, shown in the report header only)
    #[arg(long)]
    pub(crate) company: Option<String>,
    /// Average monthly revenue, plain (150000.00) or pt-BR (R$ 150.000,00, 150.000)
    #[arg(long, value_parser = parse_amount_arg, allow_hyphen_values = true)]
    pub(crate) revenue: f64,
    /// Total outstanding debt
    #[arg(long, value_parser = parse_amount_arg, allow_hyphen_values = true)]
    pub(crate) total_debt: f64,
    /// Monthly fixed costs excluding debt payments
    #[arg(long, value_parser = parse_amount_arg, allow_hyphen_values = true)]
    pub(crate) fixed_costs: f64,
    /// Monthly payment currently allocated to debt
    #[arg(long, value_parser = parse_amount_arg, allow_hyphen_values = true)]
    pub(crate) debt_service: f64,
    /// Main creditor: banks, suppliers, tax_authority or labor
    #[arg(long, value_parser = parse_creditor)]
    pub(crate) creditor: CreditorCategory,
    /// Crisis level: early, moderate, critical or severe
    #[arg(long, value_parser = parse_crisis)]
    pub(crate) crisis: CrisisSeverity,
    /// Confirm the client agreed to have the figures processed
    #[arg(long)]
    pub(crate) accept_terms: bool,
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV export with one lead per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

pub(crate) async fn run_diagnose(args: DiagnoseArgs, config: &AppConfig) -> Result<(), AppError> {
    let DiagnoseArgs {
        company,
        revenue,
        total_debt,
        fixed_costs,
        debt_service,
        creditor,
        crisis,
        accept_terms,
        output,
    } = args;

    let submission = LeadSubmission::new(
        BusinessInput {
            company_name: company,
            monthly_revenue: revenue,
            total_debt,
            monthly_fixed_costs: fixed_costs,
            debt_service_cost: debt_service,
            main_creditor: creditor,
            crisis_level: crisis,
        },
        accept_terms,
    );
    let input = submission.accept()?;

    present(input, &output, config).await
}

pub(crate) async fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    if let Some(heading) = demo_heading(args.output.format) {
        println!("{heading}");
    }
    let input = LeadSubmission::new(reference_case(), true).accept()?;
    present(input, &args.output, config).await
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let leads = LeadImporter::from_path(&args.csv)?;
    let generated_at = Utc::now();

    let entries: Vec<BatchEntry> = leads
        .into_iter()
        .map(|lead| BatchEntry {
            line: lead.line,
            outcome: match lead.outcome {
                Ok(input) => BatchOutcome::Diagnosed {
                    report: Box::new(DiagnosisReport::prepare(input, generated_at, false)),
                },
                Err(err) => BatchOutcome::Rejected {
                    reason: err.to_string(),
                },
            },
        })
        .collect();

    let accepted = entries
        .iter()
        .filter(|entry| matches!(entry.outcome, BatchOutcome::Diagnosed { .. }))
        .count();
    info!(
        path = %args.csv.display(),
        accepted,
        rejected = entries.len() - accepted,
        "lead batch diagnosed"
    );

    match args.format {
        OutputFormat::Text => render_batch(&entries),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
    }

    Ok(())
}

async fn present(
    input: BusinessInput,
    output: &OutputArgs,
    config: &AppConfig,
) -> Result<(), AppError> {
    info!(
        creditor = input.main_creditor.id(),
        crisis = input.crisis_level.id(),
        "running diagnosis"
    );

    if !output.no_delay {
        simulate_processing(config.presentation.processing_delay).await;
    }

    let report = DiagnosisReport::prepare(input, Utc::now(), output.breakdown);
    match output.format {
        OutputFormat::Text => render_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

async fn simulate_processing(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    debug!(delay_ms = delay.as_millis() as u64, "simulating analysis time");
    tokio::time::sleep(delay).await;
}

/// JSON output must stay a single document on stdout.
fn demo_heading(format: OutputFormat) -> Option<&'static str> {
    match format {
        OutputFormat::Text => Some("Diagnóstico Inteligente - caso de referência"),
        OutputFormat::Json => None,
    }
}

fn reference_case() -> BusinessInput {
    BusinessInput {
        company_name: Some("Indústria XYZ Ltda".to_string()),
        monthly_revenue: 100_000.0,
        total_debt: 1_000_000.0,
        monthly_fixed_costs: 60_000.0,
        debt_service_cost: 50_000.0,
        main_creditor: CreditorCategory::Banks,
        crisis_level: CrisisSeverity::Moderate,
    }
}

fn parse_amount_arg(raw: &str) -> Result<f64, String> {
    parse_amount(raw).ok_or_else(|| format!("'{raw}' is not a monetary amount"))
}

fn parse_creditor(raw: &str) -> Result<CreditorCategory, String> {
    raw.parse().map_err(|err: UnknownCategory| err.to_string())
}

fn parse_crisis(raw: &str) -> Result<CrisisSeverity, String> {
    raw.parse().map_err(|err: UnknownCategory| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_arguments_accept_masked_values() {
        assert_eq!(parse_amount_arg("R$ 150.000,00"), Ok(150_000.0));
        assert_eq!(parse_amount_arg("150000"), Ok(150_000.0));
        assert_eq!(parse_amount_arg("150.000"), Ok(150_000.0));
        assert_eq!(parse_amount_arg("R$ 150.000"), Ok(150_000.0));
        assert!(parse_amount_arg("1.500.5").is_err());
        assert!(parse_amount_arg("muito").is_err());
    }

    #[test]
    fn category_arguments_report_expected_values() {
        assert_eq!(parse_creditor("tax_authority"), Ok(CreditorCategory::TaxAuthority));
        let err = parse_crisis("apocalyptic").expect_err("unknown crisis");
        assert!(err.contains("early, moderate, critical, severe"));
    }

    #[test]
    fn demo_heading_is_text_only() {
        assert!(demo_heading(OutputFormat::Text).is_some());
        assert_eq!(demo_heading(OutputFormat::Json), None);
    }

    #[test]
    fn reference_case_passes_intake() {
        assert!(LeadSubmission::new(reference_case(), true).accept().is_ok());
    }
}
