use alloc::string::ToString;
use alloc::vec::Vec;

use crate::capacity::Capacity;
use crate::error::Error;
use crate::matrix::CapacityMatrix;

/// Parse a network from its text form: the node count `m` as the first token of the first line,
/// followed by `m` lines of `m` whitespace-separated capacities.
///
/// Blank lines are skipped, as is anything after the node count on the first line. Lines after
/// the `m`-th capacity row are ignored.
pub fn parse_network<C: Capacity>(input: &str) -> Result<CapacityMatrix<C>, Error> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let m = lines
        .next()
        .and_then(|(_, line)| line.split_whitespace().next())
        .ok_or(Error::MissingNodeCount)?;
    let m: usize = m
        .parse()
        .map_err(|_| Error::InvalidNodeCount(m.to_string()))?;

    let rows = lines
        .take(m)
        .map(|(line_no, line)| {
            line.split_whitespace()
                .map(|token| {
                    token.parse::<C>().map_err(|_| Error::InvalidCapacity {
                        line: line_no,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    if rows.len() < m {
        return Err(Error::MissingRows {
            expected: m,
            found: rows.len(),
        });
    }

    CapacityMatrix::new(rows)
}
