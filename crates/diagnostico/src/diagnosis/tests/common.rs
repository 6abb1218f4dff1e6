use crate::diagnosis::{BusinessInput, CreditorCategory, CrisisSeverity};

pub(super) fn business(
    monthly_revenue: f64,
    monthly_fixed_costs: f64,
    debt_service_cost: f64,
    main_creditor: CreditorCategory,
    crisis_level: CrisisSeverity,
) -> BusinessInput {
    BusinessInput {
        company_name: Some("Indústria XYZ Ltda".to_string()),
        monthly_revenue,
        total_debt: 1_000_000.0,
        monthly_fixed_costs,
        debt_service_cost,
        main_creditor,
        crisis_level,
    }
}

/// Profitable operation choked by bank debt service.
pub(super) fn reference_input() -> BusinessInput {
    business(
        100_000.0,
        60_000.0,
        50_000.0,
        CreditorCategory::Banks,
        CrisisSeverity::Moderate,
    )
}

/// Fixed costs above revenue.
pub(super) fn loss_making_input(
    main_creditor: CreditorCategory,
    crisis_level: CrisisSeverity,
) -> BusinessInput {
    business(50_000.0, 55_000.0, 10_000.0, main_creditor, crisis_level)
}

pub(super) fn sample_figures() -> Vec<(f64, f64, f64)> {
    vec![
        (100_000.0, 60_000.0, 50_000.0),
        (50_000.0, 55_000.0, 10_000.0),
        (200_000.0, 100_000.0, 20_000.0),
        (10_000.0, 9_800.0, 0.0),
        (1.0, 0.0, 1_000_000.0),
        (0.0, 0.0, 0.0),
    ]
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
