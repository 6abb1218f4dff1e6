use super::IntakeError;
use crate::diagnosis::BusinessInput;
use serde::Serialize;

/// Numeric form fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BusinessField {
    MonthlyRevenue,
    TotalDebt,
    MonthlyFixedCosts,
    DebtServiceCost,
}

impl BusinessField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::MonthlyRevenue => "Faturamento Mensal Médio",
            Self::TotalDebt => "Dívida Total",
            Self::MonthlyFixedCosts => "Custos Fixos (Sem Dívidas)",
            Self::DebtServiceCost => "Parcela Mensal das Dívidas",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: BusinessField,
    pub message: &'static str,
}

const NOT_A_NUMBER: &str = "Valor numérico inválido.";

/// Checks the positivity invariants the engine relies on, reporting every
/// offending field at once.
pub fn validate(input: &BusinessInput) -> Result<(), IntakeError> {
    let checks = [
        (
            BusinessField::MonthlyRevenue,
            input.monthly_revenue,
            input.monthly_revenue > 0.0,
            "O faturamento deve ser maior que zero.",
        ),
        (
            BusinessField::TotalDebt,
            input.total_debt,
            input.total_debt > 0.0,
            "Informe o valor total da dívida.",
        ),
        (
            BusinessField::MonthlyFixedCosts,
            input.monthly_fixed_costs,
            input.monthly_fixed_costs >= 0.0,
            "O valor não pode ser negativo.",
        ),
        (
            BusinessField::DebtServiceCost,
            input.debt_service_cost,
            input.debt_service_cost >= 0.0,
            "O valor não pode ser negativo.",
        ),
    ];

    let violations: Vec<FieldViolation> = checks
        .into_iter()
        .filter_map(|(field, value, holds, message)| {
            if !value.is_finite() {
                Some(FieldViolation {
                    field,
                    message: NOT_A_NUMBER,
                })
            } else if !holds {
                Some(FieldViolation { field, message })
            } else {
                None
            }
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(IntakeError::Invalid { violations })
    }
}

/// Reads a masked currency field the way the form does: every non-digit is
/// dropped and the remaining digits are cents.
pub fn parse_currency_input(raw: &str) -> f64 {
    let cents = raw
        .chars()
        .filter_map(|ch| ch.to_digit(10))
        .fold(0_f64, |acc, digit| acc * 10.0 + f64::from(digit));
    cents / 100.0
}

/// Reads an amount typed on the command line or exported from a spreadsheet.
///
/// pt-BR notation (`R$ 1.500,50`, `150.000`) and plain machine numbers
/// (`1500.50`) are both accepted. A `.` only separates thousands when every
/// group after it has exactly three digits, and `,` is always the decimal
/// separator. Values fitting neither reading yield `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let body = unsigned.strip_prefix("R$").unwrap_or(unsigned).trim_start();

    let magnitude = match body.split_once(',') {
        Some((integer, fraction)) => {
            if !is_digits(fraction) {
                return None;
            }
            format!("{}.{fraction}", ungroup_thousands(integer)?)
        }
        None => match ungroup_thousands(body) {
            Some(integer) => integer,
            None => plain_decimal(body)?.to_string(),
        },
    };

    let value = magnitude.parse::<f64>().ok()?;
    Some(if negative { -value } else { value })
}

/// `150.000` -> `150000`; plain digit runs pass through.
fn ungroup_thousands(integer: &str) -> Option<String> {
    let mut groups = integer.split('.');
    let leading = groups.next()?;
    if !integer.contains('.') {
        return is_digits(leading).then(|| leading.to_string());
    }
    if !is_digits(leading) || leading.len() > 3 {
        return None;
    }

    let mut digits = leading.to_string();
    for group in groups {
        if group.len() != 3 || !is_digits(group) {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}

fn plain_decimal(body: &str) -> Option<&str> {
    let (integer, fraction) = body.split_once('.')?;
    (is_digits(integer) && is_digits(fraction)).then_some(body)
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::{CreditorCategory, CrisisSeverity};
    use crate::intake::LeadSubmission;

    fn input() -> BusinessInput {
        BusinessInput {
            company_name: None,
            monthly_revenue: 100_000.0,
            total_debt: 1_000_000.0,
            monthly_fixed_costs: 60_000.0,
            debt_service_cost: 50_000.0,
            main_creditor: CreditorCategory::Banks,
            crisis_level: CrisisSeverity::Moderate,
        }
    }

    #[test]
    fn accepts_valid_submission_with_consent() {
        let accepted = LeadSubmission::new(input(), true)
            .accept()
            .expect("valid submission");
        assert_eq!(accepted, input());
    }

    #[test]
    fn zero_fixed_costs_and_debt_service_are_allowed() {
        let mut input = input();
        input.monthly_fixed_costs = 0.0;
        input.debt_service_cost = 0.0;
        assert!(validate(&input).is_ok());
    }

    #[test]
    fn reports_every_violation_with_form_messages() {
        let mut input = input();
        input.monthly_revenue = 0.0;
        input.total_debt = -1.0;
        input.debt_service_cost = -10.0;

        let err = validate(&input).expect_err("invalid input");

        let fields: Vec<BusinessField> = err.violations().iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![
                BusinessField::MonthlyRevenue,
                BusinessField::TotalDebt,
                BusinessField::DebtServiceCost
            ]
        );
        assert_eq!(
            err.violations()[0].message,
            "O faturamento deve ser maior que zero."
        );
        assert_eq!(
            err.violations()[1].message,
            "Informe o valor total da dívida."
        );
        assert!(err.to_string().contains("Faturamento Mensal Médio"));
    }

    #[test]
    fn rejects_non_finite_numbers() {
        let mut input = input();
        input.monthly_fixed_costs = f64::NAN;

        let err = validate(&input).expect_err("nan rejected");

        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].message, NOT_A_NUMBER);
    }

    #[test]
    fn missing_consent_blocks_valid_input() {
        let err = LeadSubmission::new(input(), false)
            .accept()
            .expect_err("consent required");
        assert_eq!(err, IntakeError::ConsentMissing);
    }

    #[test]
    fn validation_errors_take_precedence_over_consent() {
        let mut input = input();
        input.monthly_revenue = -5.0;
        let err = LeadSubmission::new(input, false)
            .accept()
            .expect_err("invalid");
        assert!(matches!(err, IntakeError::Invalid { .. }));
    }

    #[test]
    fn currency_input_treats_digits_as_cents() {
        assert_eq!(parse_currency_input("R$ 1.234,56"), 1234.56);
        assert_eq!(parse_currency_input("100000"), 1000.0);
        assert_eq!(parse_currency_input("abc"), 0.0);
        assert_eq!(parse_currency_input(""), 0.0);
    }

    #[test]
    fn amounts_accept_plain_or_masked_values() {
        assert_eq!(parse_amount("R$ 1.500,50"), Some(1500.5));
        assert_eq!(parse_amount(" 1500.5 "), Some(1500.5));
        assert_eq!(parse_amount("150000"), Some(150_000.0));
        assert_eq!(parse_amount("-R$ 2.000,00"), Some(-2000.0));
        assert_eq!(parse_amount("mil reais"), None);
    }

    #[test]
    fn thousands_separators_without_cents_keep_their_magnitude() {
        assert_eq!(parse_amount("R$ 150.000"), Some(150_000.0));
        assert_eq!(parse_amount("150.000"), Some(150_000.0));
        assert_eq!(parse_amount("1.500"), Some(1500.0));
        assert_eq!(parse_amount("R$1.234.567"), Some(1_234_567.0));
        assert_eq!(parse_amount("1.500,5"), Some(1500.5));
    }

    #[test]
    fn ambiguous_amounts_are_rejected() {
        assert_eq!(parse_amount("1.500.5"), None);
        assert_eq!(parse_amount("1500.000,00"), None);
        assert_eq!(parse_amount("1,500.00"), None);
        assert_eq!(parse_amount("1.50,00"), None);
        assert_eq!(parse_amount("12,5,0"), None);
        assert_eq!(parse_amount("R$"), None);
        assert_eq!(parse_amount(""), None);
    }
}
