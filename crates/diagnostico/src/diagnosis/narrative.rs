use super::domain::{BusinessInput, CreditorCategory, CrisisSeverity};
use super::metrics::{FinancialMetrics, RestructuringProjection};
use crate::currency::{format_brl, format_brl_compact};
use serde::Serialize;

/// Operational margin under which fixed costs are treated as the bottleneck.
pub const STRANGLED_MARGIN: f64 = 0.05;

pub const BOTTLENECK_STRANGLED_MARGIN: &str = "Margem Operacional Estrangulada (Custo Fixo Alto)";
pub const BOTTLENECK_DEBT_SERVICE: &str = "Serviço da Dívida Desproporcional à Geração de Caixa";
pub const BOTTLENECK_LIABILITY_MANAGEMENT: &str = "Gestão de Passivo e Ineficiência Tributária";

pub const fn estimated_timeline(crisis: CrisisSeverity) -> &'static str {
    match crisis {
        CrisisSeverity::Early => "6-12 meses",
        CrisisSeverity::Moderate | CrisisSeverity::Critical => "12-18 meses",
        CrisisSeverity::Severe => "24-36 meses",
    }
}

pub fn main_bottleneck(input: &BusinessInput, metrics: &FinancialMetrics) -> &'static str {
    if metrics.operational_margin < STRANGLED_MARGIN {
        BOTTLENECK_STRANGLED_MARGIN
    } else if input.debt_service_cost > metrics.operational_result {
        BOTTLENECK_DEBT_SERVICE
    } else {
        BOTTLENECK_LIABILITY_MANAGEMENT
    }
}

pub fn cash_flow_impact(projection: &RestructuringProjection) -> String {
    format!(
        "Liberação imediata estimada de {} mensais no fluxo de caixa através da suspensão ou renegociação.",
        format_brl(projection.monthly_savings)
    )
}

/// Score band driving the summary template and the dashboard colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViabilityTier {
    Solid,
    Alert,
    Critical,
}

impl ViabilityTier {
    pub const fn from_score(viability_score: u8) -> Self {
        if viability_score > 70 {
            Self::Solid
        } else if viability_score > 40 {
            Self::Alert
        } else {
            Self::Critical
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Solid => "Viável",
            Self::Alert => "Alerta",
            Self::Critical => "Crítico",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Solid => "#2d5a1f",
            Self::Alert => "#ca8a04",
            Self::Critical => "#b91c1c",
        }
    }
}

pub fn executive_summary(input: &BusinessInput, viability_score: u8) -> String {
    match ViabilityTier::from_score(viability_score) {
        ViabilityTier::Solid => format!(
            "A empresa apresenta fundamentos operacionais sólidos. O estresse financeiro é causado \
             majoritariamente pela estrutura de capital ({}), que é altamente passível de \
             reestruturação jurídica. Com a estratégia correta, a recuperação é viável e preservará \
             o patrimônio.",
            input.main_creditor.label()
        ),
        ViabilityTier::Alert => format!(
            "Cenário de alerta moderado. Embora a operação enfrente desafios, a reestruturação da \
             dívida de {} é essencial para evitar a insolvência. É recomendada uma intervenção \
             extrajudicial imediata para evitar execuções.",
            format_brl_compact(input.total_debt)
        ),
        ViabilityTier::Critical => "Situação crítica identificada. A empresa opera com margem \
             negativa ou insuficiente. A Recuperação Judicial pode ser necessária como mecanismo de \
             proteção (Stay Period) para impedir a expropriação de bens essenciais enquanto se \
             reorganiza a operação."
            .to_string(),
    }
}

pub const fn strategic_roadmap(creditor: CreditorCategory) -> [&'static str; 3] {
    match creditor {
        CreditorCategory::Banks => [
            "Auditoria contratual para identificar anatocismo e juros abusivos.",
            "Ajuizamento de tutela cautelar para suspensão de leilões ou bloqueios.",
            "Apresentação de plano de pagamento com carência (12 meses) e deságio.",
        ],
        CreditorCategory::TaxAuthority => [
            "Adesão a Transação Tributária Excepcional (Portaria PGFN).",
            "Substituição de penhora de faturamento por seguro garantia.",
            "Revisão fiscal para recuperação de créditos tributários compensáveis.",
        ],
        CreditorCategory::Suppliers | CreditorCategory::Labor => [
            "Blindagem patrimonial dos sócios e avalistas.",
            "Negociação coletiva extrajudicial (Mediação).",
            "Revisão de estrutura de custos fixos.",
        ],
    }
}

pub const fn risk_assessment(crisis: CrisisSeverity) -> &'static str {
    match crisis {
        CrisisSeverity::Early => {
            "Baixo risco imediato, mas tendência de deterioração rápida se mantido o modelo atual."
        }
        CrisisSeverity::Moderate => {
            "Risco médio de negativação e protestos que inviabilizem compras a prazo."
        }
        CrisisSeverity::Critical => {
            "Alto risco de bloqueios judiciais (SISBAJUD) nas contas da empresa em < 30 dias."
        }
        CrisisSeverity::Severe => {
            "Risco iminente de pedido de falência por credores ou despejo. Ação urgente necessária."
        }
    }
}
