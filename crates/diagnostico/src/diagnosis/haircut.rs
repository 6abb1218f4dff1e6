use super::domain::{CreditorCategory, CrisisSeverity};

pub const MAX_HAIRCUT_PCT: i16 = 85;
pub const MIN_HAIRCUT_PCT: i16 = 0;

/// Negotiable reduction typically obtained from each creditor class.
pub const fn base_haircut(creditor: CreditorCategory) -> i16 {
    match creditor {
        CreditorCategory::Banks => 65,
        CreditorCategory::Suppliers => 40,
        CreditorCategory::TaxAuthority => 25,
        CreditorCategory::Labor => 5,
    }
}

pub const fn severity_adjustment(crisis: CrisisSeverity) -> i16 {
    match crisis {
        CrisisSeverity::Early => -10,
        CrisisSeverity::Moderate | CrisisSeverity::Critical => 0,
        CrisisSeverity::Severe => 10,
    }
}

/// Projected haircut percentage, clamped to the realistic ceiling.
pub fn projected_haircut(creditor: CreditorCategory, crisis: CrisisSeverity) -> u8 {
    let raw = base_haircut(creditor) + severity_adjustment(crisis);
    raw.clamp(MIN_HAIRCUT_PCT, MAX_HAIRCUT_PCT) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severe_and_early_move_by_ten_points() {
        assert_eq!(projected_haircut(CreditorCategory::Banks, CrisisSeverity::Severe), 75);
        assert_eq!(projected_haircut(CreditorCategory::Banks, CrisisSeverity::Early), 55);
        assert_eq!(projected_haircut(CreditorCategory::Suppliers, CrisisSeverity::Critical), 40);
    }

    #[test]
    fn labor_early_never_goes_negative() {
        assert_eq!(projected_haircut(CreditorCategory::Labor, CrisisSeverity::Early), 0);
    }
}
