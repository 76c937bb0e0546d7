use miette::*;

use crate::circuit::{self, ranked_pairs, Pair};
use crate::dsu::Dsu;

/// Walks the pairs closest first and returns the one whose merge leaves a
/// single circuit, or `None` if the forest never collapses.
fn last_connection(n: usize, pairs: &[Pair]) -> Option<Pair> {
    let mut dsu = Dsu::new(n);

    pairs
        .iter()
        .copied()
        .find(|pair| dsu.union(pair.u, pair.v) && dsu.components() == 1)
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let points = circuit::parse_points(input)?;
    let pairs = ranked_pairs(&points);

    let result = match last_connection(points.len(), &pairs) {
        Some(Pair { u, v, .. }) => {
            tracing::debug!(u, v, "last connection found");
            i128::from(points[u].x) * i128::from(points[v].x)
        }
        None => {
            tracing::warn!("circuits never collapsed into one, falling back to 0");
            0
        }
    };

    Ok(result.to_string())
}
