use crate::model::{SummaryData, TagStats};

/// Render the console summary: write sums, read sums, then the residual
/// watch-list as count-then-sum pairs. With `all_residual`, observed
/// off-list residual tags follow in the same form.
pub fn render_summary(data: &SummaryData, all_residual: bool) -> String {
    let mut out = String::new();

    for stats in &data.writes {
        push_sum(&mut out, stats);
    }
    for stats in &data.reads {
        push_sum(&mut out, stats);
    }
    for stats in &data.residual {
        push_count_and_sum(&mut out, stats);
    }
    if all_residual {
        for stats in &data.unseeded {
            push_count_and_sum(&mut out, stats);
        }
    }

    out
}

/// One stderr warning per residual tag outside the watch-list, emitted
/// whether or not those tags are printed.
pub fn warning_lines(data: &SummaryData) -> Vec<String> {
    data.unseeded
        .iter()
        .map(|stats| {
            format!(
                "warning: residual tag {} not in watch-list ({} entries)",
                stats.tag, stats.count
            )
        })
        .collect()
}

fn push_sum(out: &mut String, stats: &TagStats) {
    out.push_str(&format!("{} {}\n", stats.tag, fmt_float(stats.sum)));
}

fn push_count_and_sum(out: &mut String, stats: &TagStats) {
    out.push_str(&format!("{} {}\n", stats.tag, stats.count));
    push_sum(out, stats);
}

/// Float formatting that keeps a trailing `.0` on integral sums
/// (`5.0`, not `5`), matching the original tool's output.
fn fmt_float(v: f64) -> String {
    format!("{:?}", v)
}
