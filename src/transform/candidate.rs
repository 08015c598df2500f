//! Candidate transform evaluation and minimum-score selection.
//!
//! The candidate set is closed: identity, log1p, sqrt, cube root, and
//! Box-Cox, tried in that order. Each candidate is scored by distance
//! from a Normal shape (`|skew| + |kurtosis - 3|`); the selector picks
//! the minimum, breaking ties in declaration order.

use crate::stats::density::KdeConfig;
use crate::stats::distribution::{shape_metrics, ShapeMetrics};
use crate::transform::boxcox::{boxcox, boxcox_fit};
use tracing::debug;

/// The closed set of candidate transforms, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Identity,
    Log1p,
    Sqrt,
    CubeRoot,
    BoxCox,
}

impl TransformKind {
    /// All candidates in declaration (tie-break) order.
    pub const ALL: [TransformKind; 5] = [
        TransformKind::Identity,
        TransformKind::Log1p,
        TransformKind::Sqrt,
        TransformKind::CubeRoot,
        TransformKind::BoxCox,
    ];

    /// Stable name used in console output, CSV headers, and reports.
    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::Identity => "identity",
            TransformKind::Log1p => "log1p",
            TransformKind::Sqrt => "sqrt",
            TransformKind::CubeRoot => "cuberoot",
            TransformKind::BoxCox => "boxcox",
        }
    }

    /// Whether the transform is restricted to strictly positive input.
    pub fn requires_positive(&self) -> bool {
        !matches!(self, TransformKind::Identity)
    }
}

impl std::fmt::Display for TransformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A transform paired with its shape metrics and normality score.
///
/// A failed candidate (Box-Cox non-convergence, degenerate transformed
/// sample) carries `score = f64::INFINITY` and no metrics, which excludes
/// it from minimum-score selection by construction.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub kind: TransformKind,
    /// Fitted Box-Cox lambda; `None` for every other kind.
    pub lambda: Option<f64>,
    pub metrics: Option<ShapeMetrics>,
    pub score: f64,
}

impl Candidate {
    /// Whether the candidate was scored successfully.
    pub fn is_scored(&self) -> bool {
        self.score.is_finite()
    }

    /// Re-apply this transform to a sequence.
    ///
    /// Non-identity transforms first restrict to the strictly-positive
    /// subsequence, matching evaluation. Box-Cox reuses the lambda fixed
    /// at fit time rather than re-fitting, so evaluation and application
    /// stay consistent.
    ///
    /// ```
    /// use normcheck::stats::density::KdeConfig;
    /// use normcheck::transform::{evaluate, TransformKind};
    ///
    /// let input = vec![4.0, 9.0, 16.0, 25.0, 36.0];
    /// let candidates = evaluate(&input, &KdeConfig::default());
    /// let sqrt = candidates
    ///     .iter()
    ///     .find(|c| c.kind == TransformKind::Sqrt)
    ///     .unwrap();
    /// assert_eq!(sqrt.apply(&input), vec![2.0, 3.0, 4.0, 5.0, 6.0]);
    /// ```
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        if self.kind == TransformKind::Identity {
            return values.to_vec();
        }
        let positive: Vec<f64> = values.iter().copied().filter(|&v| v > 0.0).collect();
        match self.kind {
            TransformKind::Identity => unreachable!(),
            TransformKind::Log1p => positive.iter().map(|x| x.ln_1p()).collect(),
            TransformKind::Sqrt => positive.iter().map(|x| x.sqrt()).collect(),
            TransformKind::CubeRoot => positive.iter().map(|x| x.cbrt()).collect(),
            // A scored Box-Cox candidate always carries its lambda; the
            // 1.0 fallback (no-op power) only covers unscored ones.
            TransformKind::BoxCox => boxcox(&positive, self.lambda.unwrap_or(1.0)),
        }
    }
}

fn score_of(metrics: &ShapeMetrics) -> f64 {
    let score = metrics.normality_score();
    if score.is_finite() {
        score
    } else {
        f64::INFINITY
    }
}

fn scored(kind: TransformKind, lambda: Option<f64>, data: &[f64], kde: &KdeConfig) -> Candidate {
    match shape_metrics(data, kde) {
        Ok(metrics) => Candidate {
            kind,
            lambda,
            metrics: Some(metrics),
            score: score_of(&metrics),
        },
        Err(err) => {
            debug!(transform = kind.name(), %err, "candidate could not be scored");
            Candidate {
                kind,
                lambda,
                metrics: None,
                score: f64::INFINITY,
            }
        }
    }
}

/// Evaluate every candidate transform against a sequence.
///
/// Identity operates on the full sequence, non-positive values included.
/// The remaining candidates operate on the strictly-positive subsequence;
/// when that subsequence is empty they are omitted from the result set
/// entirely rather than scored. Per-candidate failures (Box-Cox fit,
/// degenerate transformed sample) are recoverable: the candidate is
/// recorded with an infinite score and the rest continue.
pub fn evaluate(values: &[f64], kde: &KdeConfig) -> Vec<Candidate> {
    let mut candidates = vec![scored(TransformKind::Identity, None, values, kde)];

    let positive: Vec<f64> = values.iter().copied().filter(|&v| v > 0.0).collect();
    if positive.is_empty() {
        return candidates;
    }

    let log1p: Vec<f64> = positive.iter().map(|x| x.ln_1p()).collect();
    candidates.push(scored(TransformKind::Log1p, None, &log1p, kde));

    let sqrt: Vec<f64> = positive.iter().map(|x| x.sqrt()).collect();
    candidates.push(scored(TransformKind::Sqrt, None, &sqrt, kde));

    let cbrt: Vec<f64> = positive.iter().map(|x| x.cbrt()).collect();
    candidates.push(scored(TransformKind::CubeRoot, None, &cbrt, kde));

    match boxcox_fit(&positive) {
        Ok(fit) => {
            candidates.push(scored(
                TransformKind::BoxCox,
                Some(fit.lambda),
                &fit.data,
                kde,
            ));
        }
        Err(err) => {
            debug!(%err, "Box-Cox fit failed");
            candidates.push(Candidate {
                kind: TransformKind::BoxCox,
                lambda: None,
                metrics: None,
                score: f64::INFINITY,
            });
        }
    }

    candidates
}

/// The winning candidate and its improvement over no transform.
#[derive(Debug, Clone)]
pub struct Selection {
    pub best: Candidate,
    /// Percentage reduction in distance from Normal relative to the
    /// identity candidate; `None` when the identity score is 0 (nothing
    /// to improve) or identity was not scored.
    pub improvement_pct: Option<f64>,
}

/// Pick the candidate with the minimum finite score.
///
/// Ties break toward the earliest candidate in the input, which
/// [`evaluate`] emits in declaration order. Returns `None` when no
/// candidate was scored.
pub fn select(candidates: &[Candidate]) -> Option<Selection> {
    let mut best: Option<&Candidate> = None;
    for candidate in candidates.iter().filter(|c| c.is_scored()) {
        // Strict comparison keeps the first occurrence on exact ties.
        if best.map_or(true, |b| candidate.score < b.score) {
            best = Some(candidate);
        }
    }
    let best = best?.clone();

    let improvement_pct = candidates
        .iter()
        .find(|c| c.kind == TransformKind::Identity)
        .filter(|id| id.is_scored() && id.score > 0.0)
        .map(|id| (id.score - best.score) / id.score * 100.0);

    Some(Selection {
        best,
        improvement_pct,
    })
}
