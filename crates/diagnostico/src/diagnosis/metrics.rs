use super::domain::BusinessInput;
use serde::Serialize;

/// Monthly figures derived from the raw input before any rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    /// Revenue minus fixed costs, before debt service.
    pub operational_result: f64,
    /// Share of revenue left after fixed costs; zero when revenue is zero.
    pub operational_margin: f64,
    /// Cash left after fixed costs and the current debt service.
    pub current_net_flow: f64,
}

impl FinancialMetrics {
    pub fn from_input(input: &BusinessInput) -> Self {
        let operational_result = input.monthly_revenue - input.monthly_fixed_costs;
        let operational_margin = if input.monthly_revenue > 0.0 {
            operational_result / input.monthly_revenue
        } else {
            0.0
        };

        Self {
            operational_result,
            operational_margin,
            current_net_flow: operational_result - input.debt_service_cost,
        }
    }
}

/// Debt service and net flow once the projected haircut is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestructuringProjection {
    pub new_debt_service: f64,
    pub net_flow: f64,
    /// Monthly cash released by the haircut.
    pub monthly_savings: f64,
}

impl RestructuringProjection {
    pub fn project(input: &BusinessInput, metrics: &FinancialMetrics, haircut_pct: u8) -> Self {
        let new_debt_service = input.debt_service_cost * retained_share(haircut_pct);

        Self {
            new_debt_service,
            net_flow: metrics.operational_result - new_debt_service,
            monthly_savings: input.debt_service_cost - new_debt_service,
        }
    }
}

/// Fraction of an amount that survives a haircut of `haircut_pct` percent.
pub(crate) fn retained_share(haircut_pct: u8) -> f64 {
    1.0 - f64::from(haircut_pct) / 100.0
}
