use chrono::{TimeZone, Utc};
use diagnostico::diagnosis::{BusinessInput, CreditorCategory, CrisisSeverity, ScoreFactor};
use diagnostico::intake::LeadSubmission;
use diagnostico::report::DiagnosisReport;
use serde_json::Value;

fn submission_json() -> &'static str {
    r#"{
        "companyName": "Comércio ABC",
        "monthlyRevenue": 100000,
        "totalDebt": 1000000,
        "monthlyFixedCosts": 60000,
        "debtServiceCost": 50000,
        "mainCreditor": "banks",
        "crisisLevel": "moderate",
        "consentGiven": true
    }"#
}

#[test]
fn form_payload_flows_through_to_report() {
    let submission: LeadSubmission =
        serde_json::from_str(submission_json()).expect("payload deserialises");
    let input = submission.accept().expect("submission accepted");
    let generated_at = Utc
        .with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp");

    let report = DiagnosisReport::prepare(input, generated_at, true);

    assert_eq!(report.company_name.as_deref(), Some("Comércio ABC"));
    assert_eq!(report.result.viability_score, 98);
    assert_eq!(report.dashboard.projected_savings_percentage, 65);
    let breakdown = report.breakdown.as_ref().expect("breakdown requested");
    assert_eq!(breakdown.last().map(|c| c.factor), Some(ScoreFactor::Bounds));

    let json = serde_json::to_value(&report).expect("report serialises");
    assert_eq!(json["result"]["viabilityScore"], Value::from(98));
    assert_eq!(json["result"]["projectedSavingsPercentage"], Value::from(65));
    assert_eq!(json["input"]["mainCreditor"], Value::from("banks"));
    assert_eq!(json["dashboard"]["cashFlow"][1]["name"], Value::from("Pós-Reestruturação"));
    assert_eq!(json["generatedAt"], Value::from("2025-03-14T09:30:00Z"));
}

#[test]
fn report_omits_breakdown_unless_requested() {
    let input = BusinessInput {
        company_name: None,
        monthly_revenue: 40_000.0,
        total_debt: 250_000.0,
        monthly_fixed_costs: 45_000.0,
        debt_service_cost: 8_000.0,
        main_creditor: CreditorCategory::Labor,
        crisis_level: CrisisSeverity::Severe,
    };

    let report = DiagnosisReport::prepare(input, Utc::now(), false);

    assert!(report.breakdown.is_none());
    let json = serde_json::to_value(&report).expect("report serialises");
    assert!(json.get("breakdown").is_none());
    assert!(json.get("companyName").is_none());
    assert_eq!(json["result"]["viabilityScore"], Value::from(30));
}

#[test]
fn labels_and_ids_parse_back_to_categories() {
    for creditor in CreditorCategory::ordered() {
        assert_eq!(creditor.id().parse::<CreditorCategory>(), Ok(creditor));
        assert_eq!(creditor.label().parse::<CreditorCategory>(), Ok(creditor));
    }
    for crisis in CrisisSeverity::ordered() {
        assert_eq!(crisis.id().parse::<CrisisSeverity>(), Ok(crisis));
        assert_eq!(crisis.label().parse::<CrisisSeverity>(), Ok(crisis));
    }
    assert_eq!("Tax-Authority".parse::<CreditorCategory>(), Ok(CreditorCategory::TaxAuthority));
    assert!("agiota".parse::<CreditorCategory>().is_err());
}
