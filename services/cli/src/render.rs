use diagnostico::currency::{format_brl_compact, format_brl_whole};
use diagnostico::diagnosis::DashboardView;
use diagnostico::report::DiagnosisReport;
use serde::Serialize;

const BAR_WIDTH: usize = 30;

#[derive(Debug, Serialize)]
pub(crate) struct BatchEntry {
    pub(crate) line: u64,
    #[serde(flatten)]
    pub(crate) outcome: BatchOutcome,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub(crate) enum BatchOutcome {
    Diagnosed { report: Box<DiagnosisReport> },
    Rejected { reason: String },
}

pub(crate) fn render_report(report: &DiagnosisReport) {
    let result = &report.result;
    let dashboard = &report.dashboard;

    if let Some(company) = &report.company_name {
        println!("\n{company}");
    }
    println!(
        "Gerado em {}",
        report.generated_at.format("%d/%m/%Y %H:%M UTC")
    );

    println!("\nParecer Preliminar");
    println!("{}", result.executive_summary);

    println!("\nIndicadores");
    println!(
        "- Viabilidade: {}% ({})",
        result.viability_score,
        dashboard.viability_tier.label()
    );
    println!("- Prazo para estabilização: {}", result.estimated_timeline);
    println!(
        "- Deságio estimado: {}% de redução do passivo",
        result.projected_savings_percentage
    );
    println!("- Gargalo: {}", result.main_bottleneck);

    println!("\nImpacto no Fluxo de Caixa");
    let scale = dashboard
        .cash_flow
        .iter()
        .map(|point| point.value.abs())
        .fold(0.0_f64, f64::max);
    for point in &dashboard.cash_flow {
        println!(
            "- {:<20} {:>14} {}",
            point.name,
            format_brl_whole(point.value),
            bar(point.value, scale, point.negative)
        );
    }
    println!("{}", cash_flow_gain_line(dashboard));

    println!("\nPotencial de Redução da Dívida");
    for slice in &dashboard.debt_composition {
        println!(
            "- {:<20} {:>14} ({})",
            slice.name,
            format_brl_compact(slice.value),
            slice.color
        );
    }

    println!("\nRoadmap Estratégico");
    for (index, step) in result.strategic_roadmap.iter().enumerate() {
        println!("{}. {}", index + 1, step);
    }

    println!("\nAnálise de Risco");
    println!("{}", result.risk_assessment);

    println!("\nImpacto Imediato");
    println!("{}", result.cash_flow_impact);

    if let Some(components) = &report.breakdown {
        println!("\nComposição do score");
        for component in components {
            println!(
                "- {}: {:+} ({})",
                component.factor.label(),
                component.points,
                component.notes
            );
        }
    }
}

pub(crate) fn render_batch(entries: &[BatchEntry]) {
    if entries.is_empty() {
        println!("No leads found in the export");
        return;
    }

    println!("Lead batch ({} rows)", entries.len());
    for entry in entries {
        match &entry.outcome {
            BatchOutcome::Diagnosed { report } => {
                let company = report.company_name.as_deref().unwrap_or("(sem nome)");
                println!(
                    "- line {}: {} | viabilidade {}% ({}) | deságio {}% | {} | {}",
                    entry.line,
                    company,
                    report.result.viability_score,
                    report.dashboard.viability_tier.label(),
                    report.result.projected_savings_percentage,
                    report.result.estimated_timeline,
                    report.result.main_bottleneck
                );
            }
            BatchOutcome::Rejected { reason } => {
                println!("- line {}: rejected ({})", entry.line, reason);
            }
        }
    }
}

fn cash_flow_gain_line(dashboard: &DashboardView) -> String {
    format!(
        "- {:<20} {:>14}",
        "Ganho mensal",
        format_brl_whole(dashboard.cash_flow_gain())
    )
}

fn bar(value: f64, scale: f64, negative: bool) -> String {
    if scale <= 0.0 {
        return String::new();
    }
    let width = ((value.abs() / scale) * BAR_WIDTH as f64).round() as usize;
    let glyph = if negative { '-' } else { '#' };
    std::iter::repeat(glyph).take(width.min(BAR_WIDTH)).collect()
}
