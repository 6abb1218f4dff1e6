use crate::diagnosis::{assess, BusinessInput, DashboardView, DiagnosisResult, ScoreComponent};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything the results page shows for one lead, ready to serialise.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub input: BusinessInput,
    pub result: DiagnosisResult,
    pub dashboard: DashboardView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Vec<ScoreComponent>>,
}

impl DiagnosisReport {
    pub fn prepare(input: BusinessInput, generated_at: DateTime<Utc>, with_breakdown: bool) -> Self {
        let assessment = assess(&input);
        let dashboard = DashboardView::build(&input, &assessment.result);

        Self {
            company_name: input.company_name.clone(),
            generated_at,
            result: assessment.result,
            dashboard,
            breakdown: with_breakdown.then_some(assessment.components),
            input,
        }
    }
}
