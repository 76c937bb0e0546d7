use chumsky::prelude::*;
use glam::I64Vec3;
use miette::*;
use rayon::prelude::*;

/// Largest absolute coordinate accepted. Keeps the squared distance of any
/// two boxes inside a `u128`.
pub const COORD_LIMIT: i64 = 1 << 62;

/// Two junction boxes that could be wired together, `u < v`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair {
    pub u: usize,
    pub v: usize,
    /// Exact squared Euclidean distance, used for ranking.
    pub distance_sq: u128,
    pub distance: f64,
}

impl Pair {
    fn new(points: &[I64Vec3], u: usize, v: usize) -> Self {
        let (a, b) = (points[u].to_array(), points[v].to_array());
        let distance_sq = (0..3)
            .map(|axis| {
                let d = (i128::from(a[axis]) - i128::from(b[axis])).unsigned_abs();
                d * d
            })
            .sum::<u128>();

        Self {
            u,
            v,
            distance_sq,
            distance: (distance_sq as f64).sqrt(),
        }
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<I64Vec3>, extra::Err<Rich<'a, char>>> {
    let coord = just('-')
        .or_not()
        .then(text::int(10))
        .to_slice()
        .try_map(|digits: &str, span| {
            let value = digits.parse::<i64>().map_err(|e| Rich::custom(span, e))?;
            if value.unsigned_abs() > COORD_LIMIT.unsigned_abs() {
                return Err(Rich::custom(
                    span,
                    format!("coordinate {value} is outside ±{COORD_LIMIT}"),
                ));
            }
            Ok(value)
        });

    let point = coord
        .then_ignore(just(','))
        .then(coord)
        .then_ignore(just(','))
        .then(coord)
        .map(|((x, y), z)| I64Vec3::new(x, y, z));

    point
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        .then_ignore(text::whitespace())
}

/// Parses one `x,y,z` junction box per line.
pub fn parse(input: &str) -> Result<Vec<I64Vec3>> {
    parser().parse(input).into_result().map_err(|errs| {
        let labels = errs
            .iter()
            .map(|e| LabeledSpan::at(e.span().start..e.span().end, e.to_string()))
            .collect::<Vec<_>>();

        miette!(
            code = "day8::parse",
            labels = labels,
            "Parse failed with {} error(s)",
            errs.len()
        )
        .with_source_code(input.to_string())
    })
}

/// Like [`parse`], but rejects inputs with nothing to connect.
pub fn parse_points(input: &str) -> Result<Vec<I64Vec3>> {
    let points = parse(input)?;

    if points.len() < 2 {
        return Err(miette!(
            code = "day8::too_few_points",
            help = "the input needs at least two `x,y,z` lines",
            "Cannot form any connection from {} junction box(es)",
            points.len()
        ));
    }

    tracing::debug!(points = points.len(), "parsed junction boxes");
    Ok(points)
}

/// Every pair of points, closest first.
///
/// The sort is stable, so pairs at the same distance keep their enumeration
/// order `(0, 1), (0, 2), .., (1, 2), ..`.
#[tracing::instrument(skip(points), fields(n = points.len()))]
pub fn ranked_pairs(points: &[I64Vec3]) -> Vec<Pair> {
    let n = points.len();

    let mut pairs = (0..n)
        .into_par_iter()
        .flat_map_iter(|u| {
            (u + 1..n).map(move |v| Pair::new(points, u, v))
        })
        .collect::<Vec<_>>();

    pairs.par_sort_by_key(|pair| pair.distance_sq);

    tracing::debug!(pairs = pairs.len(), "ranked pairs by distance");
    pairs
}
