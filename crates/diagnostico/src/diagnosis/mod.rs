//! Deterministic restructuring diagnosis.
//!
//! [`diagnose`] maps a company's monthly figures to a viability score, a
//! projected haircut and a set of canned narrative fields. The computation is
//! pure: no I/O, no logging, no shared state. Callers validate the input
//! beforehand (see [`crate::intake`]); degenerate figures such as zero revenue
//! still produce a result.

mod dashboard;
mod domain;
pub mod haircut;
mod metrics;
pub mod narrative;
mod rules;

#[cfg(test)]
mod tests;

pub use dashboard::{CashFlowPoint, DashboardView, DebtSlice};
pub use domain::{BusinessInput, CreditorCategory, CrisisSeverity, DiagnosisResult, UnknownCategory};
pub use metrics::{FinancialMetrics, RestructuringProjection};
pub use narrative::ViabilityTier;
pub use rules::{MAX_SCORE, MIN_SCORE};

use serde::Serialize;

/// Heuristic that moved the viability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    OperationalResult,
    DebtCoverage,
    CreditorProfile,
    Bounds,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::OperationalResult => "Resultado operacional",
            Self::DebtCoverage => "Cobertura da dívida após deságio",
            Self::CreditorProfile => "Perfil do credor",
            Self::Bounds => "Limites do score",
        }
    }
}

/// Discrete contribution to the viability score, kept for audits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: i16,
    pub notes: String,
}

/// Full trail behind a diagnosis: intermediate figures, score components and
/// the result itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub metrics: FinancialMetrics,
    pub projection: RestructuringProjection,
    pub components: Vec<ScoreComponent>,
    pub result: DiagnosisResult,
}

/// Runs the diagnosis and returns only the presentation-facing result.
pub fn diagnose(input: &BusinessInput) -> DiagnosisResult {
    assess(input).result
}

/// Runs the diagnosis and keeps every intermediate step.
pub fn assess(input: &BusinessInput) -> Assessment {
    let metrics = FinancialMetrics::from_input(input);
    let haircut_pct = haircut::projected_haircut(input.main_creditor, input.crisis_level);
    let projection = RestructuringProjection::project(input, &metrics, haircut_pct);
    let (components, viability_score) =
        rules::score_viability(input, &metrics, &projection, haircut_pct);

    let result = DiagnosisResult {
        viability_score,
        estimated_timeline: narrative::estimated_timeline(input.crisis_level).to_string(),
        cash_flow_impact: narrative::cash_flow_impact(&projection),
        main_bottleneck: narrative::main_bottleneck(input, &metrics).to_string(),
        strategic_roadmap: narrative::strategic_roadmap(input.main_creditor)
            .iter()
            .map(|step| step.to_string())
            .collect(),
        executive_summary: narrative::executive_summary(input, viability_score),
        risk_assessment: narrative::risk_assessment(input.crisis_level).to_string(),
        projected_savings_percentage: haircut_pct,
    };

    Assessment {
        metrics,
        projection,
        components,
        result,
    }
}
