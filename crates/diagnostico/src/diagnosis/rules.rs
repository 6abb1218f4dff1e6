use super::domain::{BusinessInput, CreditorCategory};
use super::metrics::{FinancialMetrics, RestructuringProjection};
use super::{ScoreComponent, ScoreFactor};
use crate::currency::format_brl;

pub const BASE_SCORE: i16 = 50;
pub const MAX_SCORE: i16 = 98;
pub const MIN_SCORE: i16 = 10;

pub(crate) fn score_viability(
    input: &BusinessInput,
    metrics: &FinancialMetrics,
    projection: &RestructuringProjection,
    haircut_pct: u8,
) -> (Vec<ScoreComponent>, u8) {
    let mut components = Vec::new();
    let mut total_score = BASE_SCORE;

    if metrics.operational_result > 0.0 {
        components.push(ScoreComponent {
            factor: ScoreFactor::OperationalResult,
            points: 30,
            notes: format!(
                "operação gera {} por mês antes do serviço da dívida",
                format_brl(metrics.operational_result)
            ),
        });
        total_score += 30;
    } else {
        components.push(ScoreComponent {
            factor: ScoreFactor::OperationalResult,
            points: -20,
            notes: format!(
                "operação consome {} por mês antes do serviço da dívida",
                format_brl(-metrics.operational_result)
            ),
        });
        total_score -= 20;
    }

    if projection.net_flow > 0.0 {
        components.push(ScoreComponent {
            factor: ScoreFactor::DebtCoverage,
            points: 20,
            notes: format!(
                "fluxo líquido de {} permanece positivo com deságio de {haircut_pct}%",
                format_brl(projection.net_flow)
            ),
        });
        total_score += 20;
    }

    match input.main_creditor {
        CreditorCategory::Banks => {
            components.push(ScoreComponent {
                factor: ScoreFactor::CreditorProfile,
                points: 10,
                notes: "bancos têm provisão para perdas e negociam de forma racional".to_string(),
            });
            total_score += 10;
        }
        CreditorCategory::TaxAuthority => {
            components.push(ScoreComponent {
                factor: ScoreFactor::CreditorProfile,
                points: -5,
                notes: "transações com o Fisco seguem programas rígidos".to_string(),
            });
            total_score -= 5;
        }
        CreditorCategory::Suppliers | CreditorCategory::Labor => {}
    }

    let clamped = total_score.clamp(MIN_SCORE, MAX_SCORE);
    if clamped != total_score {
        components.push(ScoreComponent {
            factor: ScoreFactor::Bounds,
            points: clamped - total_score,
            notes: format!("score bruto {total_score} limitado ao intervalo [{MIN_SCORE}, {MAX_SCORE}]"),
        });
    }

    (components, clamped as u8)
}
