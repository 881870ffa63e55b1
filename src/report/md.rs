use crate::types::record::{Component, Marks};
use crate::types::report::{CgpaReport, SgpaReport};

pub fn sgpa_markdown(report: &SgpaReport) -> String {
    let mut output = String::new();
    output.push_str("# SGPA Report\n\n");
    output.push_str(&format!("SGPA: {:.2}\n\n", report.summary.sgpa));

    output.push_str("## Subjects\n\n");
    if report.subjects.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str(
            "| Subject | Credit | Max | Scored | Internal | External | % | GP | GP x Credit |\n",
        );
        output.push_str("|---|---|---|---|---|---|---|---|---|\n");
        for subject in &report.subjects {
            let (internal, external) = match &subject.marks {
                Marks::Simple(_) => ("-".to_string(), "-".to_string()),
                Marks::Components { external, internal } => {
                    (fraction(internal), fraction(external))
                }
            };
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {:.2}% | {} | {} |\n",
                subject.name,
                subject.credit,
                subject.max_total,
                subject.scored,
                internal,
                external,
                subject.percentage,
                subject.grade_point,
                subject.weighted
            ));
        }
        output.push('\n');
    }

    output.push_str("## Summary\n\n");
    output.push_str(&format!(
        "- highest: {}\n- lowest: {}\n- passed: {}\n- failed: {}\n- credits: {}\n",
        percent_or_dash(report.summary.highest),
        percent_or_dash(report.summary.lowest),
        report.summary.pass_count,
        report.summary.fail_count,
        report.summary.total_credits
    ));

    output
}

pub fn cgpa_markdown(report: &CgpaReport) -> String {
    let mut output = String::new();
    output.push_str("# CGPA Report\n\n");
    output.push_str(&format!("CGPA: {:.2}\n\n", report.summary.cgpa));

    output.push_str("## Semesters\n\n");
    output.push_str("| Semester | SGPA | Credits | SGPA x Credits |\n");
    output.push_str("|---|---|---|---|\n");
    for row in &report.summary.semesters {
        output.push_str(&format!(
            "| Sem {} | {:.2} | {} | {:.2} |\n",
            row.index, row.sgpa, row.credit, row.product
        ));
    }
    output.push('\n');

    output.push_str(&format!(
        "- semesters: {}\n- credits: {}\n",
        report.summary.semesters.len(),
        report.summary.total_credits
    ));

    output
}

fn fraction(component: &Component) -> String {
    format!("{}/{}", component.scored, component.total)
}

fn percent_or_dash(value: Option<f64>) -> String {
    value
        .map(|value| format!("{value:.2}%"))
        .unwrap_or_else(|| "-".to_string())
}
