//! Static HTML summary tables and plain-language metric readings.

use crate::stats::basic::SummaryStats;
use crate::transform::{Candidate, Selection, TransformKind};
use std::fmt::Write as _;

/// Short interpretation of a skewness value.
pub fn interpret_skew(skew: f64) -> &'static str {
    if skew.abs() < 0.5 {
        "approximately symmetric"
    } else if (0.5..1.0).contains(&skew) {
        "moderately right-skewed"
    } else if skew >= 1.0 {
        "strongly right-skewed (heavy right tail)"
    } else if skew > -1.0 {
        "moderately left-skewed"
    } else {
        "strongly left-skewed (heavy left tail)"
    }
}

/// Short interpretation of kurtosis relative to Normal (= 3).
pub fn interpret_kurtosis(kurtosis: f64) -> &'static str {
    if (kurtosis - 3.0).abs() < 0.3 {
        "close to mesokurtic (similar tails to Normal)"
    } else if kurtosis > 3.0 {
        "leptokurtic (heavier tails, more extreme values)"
    } else {
        "platykurtic (lighter tails, fewer extremes)"
    }
}

/// Short interpretation of a KDE mode count.
pub fn interpret_modes(mode_count: usize) -> String {
    match mode_count {
        0 | 1 => "approximately unimodal (single main peak)".to_string(),
        2 => "likely bimodal (two prominent peaks)".to_string(),
        n => format!("multimodal (about {n} peaks detected)"),
    }
}

// Styling carried over from the course report tables: black outer
// border, beige body, green header band.
const STYLE: &str = r#"    body {
      font-family: Arial, sans-serif;
      background: #ffffff;
      margin: 24px;
    }
    h2 {
      text-align: center;
      margin-bottom: 6px;
    }
    p.subtitle {
      text-align: left;
      margin-top: 16px;
      margin-bottom: 0;
      font-size: 14px;
      max-width: 98%;
    }
    .table-wrapper {
      margin-top: 8px;
      border: 4px solid #000000;
      border-radius: 10px;
      padding: 0;
      overflow: hidden;
    }
    .eda-table {
      width: 100%;
      border-collapse: collapse;
      background: #f5f4e8;
    }
    .eda-table th {
      background: #4ade80;
      color: black;
      font-weight: bold;
      padding: 10px;
      border-bottom: 2px solid black;
      border-right: 1px solid black;
      text-align: center;
    }
    .eda-table th:last-child {
      border-right: none;
    }
    .eda-table td {
      padding: 8px;
      border-bottom: 1px solid black;
      border-right: 1px solid black;
      text-align: center;
    }
    .eda-table tr:last-child td {
      border-bottom: none;
    }
    .eda-table td:last-child {
      border-right: none;
    }
"#;

fn summary_table(label: &str, stats: &SummaryStats) -> String {
    format!(
        r#"  <div class="table-wrapper">
    <table class="eda-table">
      <tr>
        <th>Column</th>
        <th>N</th>
        <th>Mean</th>
        <th>Std</th>
        <th>Min</th>
        <th>Q1</th>
        <th>Median</th>
        <th>Q3</th>
        <th>Max</th>
        <th>% within IQR</th>
        <th>Tukey outliers</th>
      </tr>
      <tr>
        <td>{label}</td>
        <td>{n}</td>
        <td>{mean:.2}</td>
        <td>{std:.2}</td>
        <td>{min:.0}</td>
        <td>{q1:.2}</td>
        <td>{median:.2}</td>
        <td>{q3:.2}</td>
        <td>{max:.0}</td>
        <td>{pct:.2}%</td>
        <td>{outliers}</td>
      </tr>
    </table>
  </div>
"#,
        label = label,
        n = stats.n,
        mean = stats.mean,
        std = stats.std_dev,
        min = stats.min,
        q1 = stats.q1,
        median = stats.median,
        q3 = stats.q3,
        max = stats.max,
        pct = stats.pct_within_iqr,
        outliers = stats.outlier_count,
    )
}

fn transform_table(candidates: &[Candidate], selection: &Selection) -> String {
    let mut ranked: Vec<&Candidate> = candidates.iter().collect();
    ranked.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal));

    let mut rows = String::new();
    for candidate in ranked {
        let name = if candidate.kind == selection.best.kind {
            format!("<strong>{}</strong>", candidate.kind)
        } else {
            candidate.kind.to_string()
        };
        let (skew, kurtosis) = match candidate.metrics {
            Some(m) => (format!("{:.4}", m.skew), format!("{:.4}", m.kurtosis)),
            None => ("&mdash;".to_string(), "&mdash;".to_string()),
        };
        let score = if candidate.is_scored() {
            format!("{:.4}", candidate.score)
        } else {
            "&infin; (failed)".to_string()
        };
        let lambda = match (candidate.kind, candidate.lambda) {
            (TransformKind::BoxCox, Some(l)) => format!("{l:.3}"),
            _ => "&mdash;".to_string(),
        };
        let _ = write!(
            rows,
            r#"      <tr>
        <td>{name}</td>
        <td>{skew}</td>
        <td>{kurtosis}</td>
        <td>{score}</td>
        <td>{lambda}</td>
      </tr>
"#
        );
    }

    format!(
        r#"  <div class="table-wrapper">
    <table class="eda-table">
      <tr>
        <th>Transform</th>
        <th>Skewness</th>
        <th>Kurtosis</th>
        <th>Score = |skew| + |kurt - 3|</th>
        <th>Lambda</th>
      </tr>
{rows}    </table>
  </div>
"#
    )
}

/// Render a full standalone HTML report: summary statistics for the
/// analyzed column plus the ranked transform table (lowest score first,
/// recommended transform in bold).
pub fn render_report(
    title: &str,
    column_label: &str,
    stats: &SummaryStats,
    candidates: &[Candidate],
    selection: &Selection,
) -> String {
    let improvement = match selection.improvement_pct {
        Some(pct) => format!(
            "Recommended transform: <strong>{}</strong> ({pct:.2}% reduction in distance from Normal).",
            selection.best.kind
        ),
        None => format!(
            "Recommended transform: <strong>{}</strong>.",
            selection.best.kind
        ),
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>
{STYLE}  </style>
</head>
<body>
  <h2>{title}</h2>
{summary}
  <p class="subtitle">Score = |skew| + |kurtosis - 3| (lower is closer to Normal).</p>
{transforms}
  <p class="subtitle">{improvement}</p>
</body>
</html>
"#,
        summary = summary_table(column_label, stats),
        transforms = transform_table(candidates, selection),
    )
}
