use super::domain::{BusinessInput, DiagnosisResult};
use super::metrics::retained_share;
use super::narrative::ViabilityTier;
use serde::Serialize;

pub const PROJECTED_DEBT_COLOR: &str = "#2d5a1f";
pub const SAVINGS_COLOR: &str = "#d4af37";

/// Single bar in the monthly cash-flow comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowPoint {
    pub name: &'static str,
    pub value: f64,
    pub negative: bool,
}

/// Slice of the debt composition donut chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtSlice {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
}

/// Numbers backing the results dashboard. Drawing them is the consumer's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub viability_score: u8,
    pub viability_tier: ViabilityTier,
    pub projected_savings_percentage: u8,
    pub estimated_timeline: String,
    pub main_bottleneck: String,
    pub cash_flow: Vec<CashFlowPoint>,
    pub debt_composition: Vec<DebtSlice>,
}

impl DashboardView {
    pub fn build(input: &BusinessInput, result: &DiagnosisResult) -> Self {
        let reduction = f64::from(result.projected_savings_percentage) / 100.0;
        let retained = retained_share(result.projected_savings_percentage);
        let operational_result = input.monthly_revenue - input.monthly_fixed_costs;
        let current = operational_result - input.debt_service_cost;
        let projected = operational_result - input.debt_service_cost * retained;

        let projected_debt = input.total_debt * retained;

        Self {
            viability_score: result.viability_score,
            viability_tier: ViabilityTier::from_score(result.viability_score),
            projected_savings_percentage: result.projected_savings_percentage,
            estimated_timeline: result.estimated_timeline.clone(),
            main_bottleneck: result.main_bottleneck.clone(),
            cash_flow: vec![
                CashFlowPoint {
                    name: "Atual",
                    value: current,
                    negative: current < 0.0,
                },
                CashFlowPoint {
                    name: "Pós-Reestruturação",
                    value: projected,
                    negative: projected < 0.0,
                },
            ],
            debt_composition: vec![
                DebtSlice {
                    name: "Dívida Projetada",
                    value: projected_debt,
                    color: PROJECTED_DEBT_COLOR,
                },
                DebtSlice {
                    name: "Economia",
                    value: input.total_debt * reduction,
                    color: SAVINGS_COLOR,
                },
            ],
        }
    }

    /// Monthly improvement between the current and restructured cash flow.
    pub fn cash_flow_gain(&self) -> f64 {
        match self.cash_flow.as_slice() {
            [current, projected] => projected.value - current.value,
            _ => 0.0,
        }
    }
}
