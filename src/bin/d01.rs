use std::collections::HashMap;

use lib::prelude::*;

fn main() -> Result<()> {
    let opts = cli::Opts::parse()?;
    let (input, path) = lib::input!("d01.txt");
    cli::run(&opts, path, input, Some((11, 31)), solve)
}

/// Part 1 is the sum of pairwise distances between the two columns
/// sorted independently. Part 2 weighs each value in the left column by
/// how often it occurs in the right column.
fn solve(mut input: IStr) -> Result<(u32, u32)> {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for row in input.iter::<Nl<[u32; 2]>>() {
        let Nl([l, r]) = row?;
        left.push(l);
        right.push(r);
    }

    let mut counts = HashMap::new();

    for value in &right {
        *counts.entry(*value).or_insert(0u32) += 1;
    }

    left.sort_unstable();
    right.sort_unstable();

    let mut part1 = 0;
    let mut part2 = 0;

    for (l, r) in left.iter().zip(&right) {
        part1 += l.abs_diff(*r);
    }

    for value in &left {
        part2 += value * counts.get(value).copied().unwrap_or_default();
    }

    Ok((part1, part2))
}

#[cfg(test)]
mod tests {
    use lib::IStr;

    use super::solve;

    const EXAMPLE: &[u8] = b"3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    #[test]
    fn test_example() {
        let (part1, part2) = solve(IStr::new(EXAMPLE)).unwrap();
        assert_eq!(part1, 11);
        assert_eq!(part2, 31);
    }

    #[test]
    fn test_swapped_columns() {
        let swapped: &[u8] = b"4   3\n3   4\n5   2\n3   1\n9   3\n3   3\n";
        let (part1, _) = solve(IStr::new(EXAMPLE)).unwrap();
        let (swapped1, _) = solve(IStr::new(swapped)).unwrap();
        assert_eq!(part1, swapped1);
    }

    #[test]
    fn test_unique_right_column() {
        // With no repeats on the right, the score reduces to the sum of
        // left values that also appear on the right.
        let (_, part2) = solve(IStr::new(b"1 2\n3 1\n5 3\n")).unwrap();
        assert_eq!(part2, 1 + 3);
    }
}
