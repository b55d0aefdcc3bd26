use std::fmt::Write;
use trust_score::error::AppError;
use trust_score::report::views::MetricRow;
use trust_score::report::TrustReport;

pub(crate) fn render_json(report: &TrustReport) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub(crate) fn render_text(report: &TrustReport) -> String {
    let header = format!(
        "{:<50} {:>10} {:>16} {:>20} {:>27}",
        "Metric_Name",
        "Weight (W)",
        "Merit Value (MV)",
        "Success_Ratio (SR)",
        "Total Weight (W * MV * SR)"
    );
    let separator = "=".repeat(header.len());
    let mut out = String::new();

    writeln!(&mut out, "Generated at {}", report.generated_at.to_rfc3339())
        .expect("write timestamp");
    if let Some(simulation) = &report.simulation {
        writeln!(&mut out, "\nSIMULATION PARAMETERS\n=====================")
            .expect("write simulation heading");
        writeln!(
            &mut out,
            "TOTAL ATTEMPTS FOR TRUST SCORE CALCULATION : {}",
            simulation.total_attempts
        )
        .expect("write total attempts");
        writeln!(
            &mut out,
            "MAX FAILURE THRESHOLD FOR SIMULATION : {}",
            simulation.max_failure_limit
        )
        .expect("write failure threshold");
        writeln!(
            &mut out,
            "CONSTANT WEIGHT FOR EACH METRIC : {}",
            simulation.weight_constant
        )
        .expect("write weight constant");
    }
    writeln!(
        &mut out,
        "TRUST CALCULATION SCALE : {} POINTS\n",
        report.weight_constant
    )
    .expect("write scale");

    writeln!(&mut out, "{separator}\n{header}\n{separator}").expect("write table header");
    write_group(
        &mut out,
        "MANDATORY METRICS (MUST BE IMPLEMENTED)",
        &report.mandatory_metrics,
    );
    write_group(
        &mut out,
        "OTHER METRICS (SHOULD BE IMPLEMENTED)",
        &report.optional_metrics,
    );
    writeln!(&mut out, "{separator}").expect("write separator");
    writeln!(
        &mut out,
        "{:<50} {:>10} {:>16} {:>20} {:>27}",
        "Calculated weight of all metrics",
        "",
        report.sum_of_merit_value,
        "",
        report.grand_total_weight
    )
    .expect("write totals");
    writeln!(&mut out, "{separator}").expect("write separator");

    writeln!(&mut out, "\n\nTRUST SCORE REPORT\n{separator}").expect("write report heading");
    writeln!(
        &mut out,
        "Total number of metrics used for trust score calculation : {}",
        report.metric_count
    )
    .expect("write metric count");
    writeln!(
        &mut out,
        "Final trust score on {} points scale : {}",
        report.weight_constant, report.final_trust_score
    )
    .expect("write final score");

    if report.is_rejected() {
        writeln!(
            &mut out,
            "\n\nTRUST SCORE IS ZERO BECAUSE OF FOLLOWING METRICS NOT IMPLEMENTED:\n"
        )
        .expect("write rejection heading");
        for name in &report.failed_mandatory_metrics {
            writeln!(&mut out, "{name}").expect("write failed metric");
        }
    }
    writeln!(&mut out, "{separator}").expect("write separator");
    writeln!(&mut out, "{}", report.classification.verdict).expect("write verdict");
    let classes: Vec<&str> = report
        .classification
        .eligible_data_classes
        .iter()
        .map(|class| class.label())
        .collect();
    writeln!(&mut out, "Eligible data classes: {}", classes.join(", "))
        .expect("write eligible classes");

    out
}

fn write_group(out: &mut String, title: &str, rows: &[MetricRow]) {
    writeln!(out, "\n{title}\n{}", "-".repeat(title.len())).expect("write group heading");
    for row in rows {
        writeln!(
            out,
            "{:<50} {:>10} {:>16} {:>20} {:>27}",
            row.name, row.weight_constant, row.merit_value, row.success_ratio, row.total_weight
        )
        .expect("write metric row");
    }
}
