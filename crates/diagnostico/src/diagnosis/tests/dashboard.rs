use super::common::*;
use crate::diagnosis::dashboard::{PROJECTED_DEBT_COLOR, SAVINGS_COLOR};
use crate::diagnosis::{diagnose, CreditorCategory, CrisisSeverity, DashboardView, ViabilityTier};

#[test]
fn reference_dashboard_series() {
    let input = reference_input();
    let result = diagnose(&input);

    let view = DashboardView::build(&input, &result);

    assert_eq!(view.viability_score, 98);
    assert_eq!(view.viability_tier, ViabilityTier::Solid);
    assert_eq!(view.cash_flow[0].name, "Atual");
    assert_close(view.cash_flow[0].value, -10_000.0);
    assert!(view.cash_flow[0].negative);
    assert_eq!(view.cash_flow[1].name, "Pós-Reestruturação");
    assert_close(view.cash_flow[1].value, 22_500.0);
    assert!(!view.cash_flow[1].negative);
    assert_close(view.cash_flow_gain(), 32_500.0);

    assert_eq!(view.debt_composition[0].color, PROJECTED_DEBT_COLOR);
    assert_close(view.debt_composition[0].value, 350_000.0);
    assert_eq!(view.debt_composition[1].color, SAVINGS_COLOR);
    assert_close(view.debt_composition[1].value, 650_000.0);
}

#[test]
fn zero_haircut_keeps_debt_whole() {
    let input = business(
        30_000.0,
        10_000.0,
        4_000.0,
        CreditorCategory::Labor,
        CrisisSeverity::Early,
    );
    let result = diagnose(&input);

    let view = DashboardView::build(&input, &result);

    assert_eq!(view.projected_savings_percentage, 0);
    assert_close(view.debt_composition[0].value, 1_000_000.0);
    assert_close(view.debt_composition[1].value, 0.0);
    assert_close(view.cash_flow_gain(), 0.0);
}
