use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Creditor holding the largest share of the company's debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditorCategory {
    Banks,
    Suppliers,
    TaxAuthority,
    Labor,
}

impl CreditorCategory {
    pub const fn ordered() -> [Self; 4] {
        [Self::Banks, Self::Suppliers, Self::TaxAuthority, Self::Labor]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Banks => "banks",
            Self::Suppliers => "suppliers",
            Self::TaxAuthority => "tax_authority",
            Self::Labor => "labor",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Banks => "Bancos (Empréstimos/Capital de Giro)",
            Self::Suppliers => "Fornecedores",
            Self::TaxAuthority => "Tributário (Fisco)",
            Self::Labor => "Trabalhista",
        }
    }
}

impl fmt::Display for CreditorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CreditorCategory {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = normalize_key(raw);
        Self::ordered()
            .into_iter()
            .find(|candidate| {
                needle == candidate.id()
                    || needle == normalize_key(&format!("{candidate:?}"))
                    || needle == normalize_key(candidate.label())
            })
            .or_else(|| match needle.as_str() {
                "tax" | "fisco" | "tributario" | "tributário" => Some(Self::TaxAuthority),
                "bancos" => Some(Self::Banks),
                "fornecedores" => Some(Self::Suppliers),
                "trabalhista" => Some(Self::Labor),
                _ => None,
            })
            .ok_or_else(|| UnknownCategory::creditor(raw))
    }
}

/// How acute the company's financial distress is, independent of its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrisisSeverity {
    Early,
    Moderate,
    Critical,
    Severe,
}

impl CrisisSeverity {
    pub const fn ordered() -> [Self; 4] {
        [Self::Early, Self::Moderate, Self::Critical, Self::Severe]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::Moderate => "moderate",
            Self::Critical => "critical",
            Self::Severe => "severe",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Early => "Inicial (Atrasos pontuais)",
            Self::Moderate => "Moderada (Capital de giro comprometido)",
            Self::Critical => "Crítica (Execuções judiciais/Bloqueios)",
            Self::Severe => "Severa (Risco iminente de falência)",
        }
    }
}

impl fmt::Display for CrisisSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CrisisSeverity {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = normalize_key(raw);
        Self::ordered()
            .into_iter()
            .find(|candidate| needle == candidate.id() || needle == normalize_key(candidate.label()))
            .or_else(|| match needle.as_str() {
                "inicial" => Some(Self::Early),
                "moderada" => Some(Self::Moderate),
                "critica" | "crítica" => Some(Self::Critical),
                "severa" => Some(Self::Severe),
                _ => None,
            })
            .ok_or_else(|| UnknownCategory::crisis(raw))
    }
}

/// Raised when free text does not name a known creditor or crisis level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownCategory {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl UnknownCategory {
    fn creditor(value: &str) -> Self {
        Self {
            kind: "creditor",
            value: value.trim().to_string(),
            expected: CreditorCategory::ordered()
                .iter()
                .map(|creditor| creditor.id())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    fn crisis(value: &str) -> Self {
        Self {
            kind: "crisis level",
            value: value.trim().to_string(),
            expected: CrisisSeverity::ordered()
                .iter()
                .map(|crisis| crisis.id())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

fn normalize_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['-', ' '], "_")
}

/// Financial figures collected from a prospective client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub monthly_revenue: f64,
    pub total_debt: f64,
    pub monthly_fixed_costs: f64,
    /// Monthly payment currently allocated to debt.
    pub debt_service_cost: f64,
    pub main_creditor: CreditorCategory,
    pub crisis_level: CrisisSeverity,
}

/// Canned assessment handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub viability_score: u8,
    pub estimated_timeline: String,
    pub cash_flow_impact: String,
    pub main_bottleneck: String,
    pub strategic_roadmap: Vec<String>,
    pub executive_summary: String,
    pub risk_assessment: String,
    pub projected_savings_percentage: u8,
}
