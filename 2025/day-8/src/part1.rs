use glam::I64Vec3;
use itertools::Itertools;
use miette::*;

use crate::circuit::{self, ranked_pairs};
use crate::dsu::Dsu;

/// How many of the closest pairs get wired together for the real input.
pub const CONNECTIONS: usize = 1000;

/// Wires together the `limit` closest pairs (or all of them, if there are fewer).
fn connect_closest(points: &[I64Vec3], limit: usize) -> Dsu {
    let mut dsu = Dsu::new(points.len());

    for pair in ranked_pairs(points).iter().take(limit) {
        dsu.union(pair.u, pair.v);
    }

    dsu
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    process_with_limit(input, CONNECTIONS)
}

/// Product of the three largest circuits after `limit` connections.
///
/// With fewer than three circuits left, only the ones present are multiplied.
#[tracing::instrument(skip(input))]
pub fn process_with_limit(input: &str, limit: usize) -> Result<String> {
    let points = circuit::parse_points(input)?;
    let dsu = connect_closest(&points, limit);

    let sizes = dsu.component_sizes();
    tracing::debug!(circuits = sizes.len(), "connected closest pairs");

    let result: usize = sizes.into_iter().k_largest(3).product();

    Ok(result.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    const EXAMPLE: &str = "162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689";

    #[test]
    fn it_works() -> Result<()> {
        // The example only wires up the 10 shortest connections
        assert_eq!("40", process_with_limit(EXAMPLE, 10)?);
        Ok(())
    }

    #[test]
    fn separated_pairs_form_two_circuits() -> Result<()> {
        let input = "0,0,0
0,0,1
1000,1000,1000
1000,1000,1001";
        let points = circuit::parse_points(input)?;
        let dsu = connect_closest(&points, 2);

        assert_eq!(dsu.component_sizes(), vec![2, 2]);
        assert_eq!("4", process_with_limit(input, 2)?);
        Ok(())
    }

    #[rstest]
    #[case::nothing_wired(0, "1")]
    #[case::one_wire(1, "2")]
    #[case::limit_beyond_pair_count(1000, "4")]
    fn fewer_than_three_circuits(#[case] limit: usize, #[case] expected: &str) -> Result<()> {
        let input = "0,0,0\n0,0,1\n0,0,3\n0,0,7";
        // limit 0 leaves four singletons; 1000 collapses everything
        assert_eq!(expected, process_with_limit(input, limit)?);
        Ok(())
    }

    #[test]
    fn collapsed_forest_has_one_circuit_of_everything() -> Result<()> {
        let points = circuit::parse_points(EXAMPLE)?;
        let dsu = connect_closest(&points, usize::MAX);

        assert_eq!(dsu.components(), 1);
        assert_eq!(dsu.component_sizes(), vec![points.len()]);
        Ok(())
    }

    #[test]
    fn rejects_a_lonely_box() {
        assert!(process("1,2,3").is_err());
    }
}
