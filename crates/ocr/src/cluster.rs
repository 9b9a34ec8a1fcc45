//! Grouping detected tokens into receipt rows by their top edges.

use slipscan_core::TopEdge;

use crate::types::{Line, Token};

/// Rows being built while folding over the tokens.
struct Accumulator<'a> {
    rows: Vec<Vec<&'a Token>>,
    current: Vec<&'a Token>,
    /// Top edge of the token that opened `current`.
    baseline: TopEdge,
}

impl<'a> Accumulator<'a> {
    fn push(mut self, token: &'a Token, epsilon: f64) -> Self {
        let mid = token.quad.top_midpoint();
        let predicted = self.baseline.y_at(mid.x);
        if (mid.y - predicted).abs() > epsilon {
            self.rows.push(std::mem::take(&mut self.current));
            self.baseline = token.quad.top_edge();
        }
        self.current.push(token);
        self
    }

    fn finish(mut self) -> Vec<Vec<&'a Token>> {
        self.rows.push(self.current);
        self.rows
    }
}

/// Group tokens into rows, returning the tokens themselves.
///
/// Tokens are visited in reverse, so the bottom of the receipt comes first.
/// Each token's top-edge midpoint is compared against the baseline of the
/// row currently open; a vertical miss of more than `epsilon` pixels opens a
/// new row seeded with that token's own top edge. Neither the row order nor
/// the order within a row is reversed back afterwards.
pub fn cluster_tokens(tokens: &[Token], epsilon: f64) -> Vec<Vec<&Token>> {
    let Some(seed) = tokens.last() else {
        return Vec::new();
    };
    let start = Accumulator {
        rows: Vec::new(),
        current: Vec::new(),
        baseline: seed.quad.top_edge(),
    };
    tokens
        .iter()
        .rev()
        .fold(start, |acc, token| acc.push(token, epsilon))
        .finish()
}

/// [`cluster_tokens`], keeping only each token's text.
///
/// `epsilon` is a pixel tolerance, usually about 1% of the image height.
pub fn cluster(tokens: &[Token], epsilon: f64) -> Vec<Line> {
    let lines: Vec<Line> = cluster_tokens(tokens, epsilon)
        .into_iter()
        .map(|row| row.into_iter().map(|t| t.text.clone()).collect())
        .collect();
    tracing::debug!(tokens = tokens.len(), lines = lines.len(), "clustered receipt lines");
    lines
}
