use lib::prelude::*;

fn main() -> Result<()> {
    let opts = cli::Opts::parse()?;
    let (input, path) = lib::input!("d02.txt");
    cli::run(&opts, path, input, Some((2, 4)), solve)
}

/// Part 1 counts reports which are safe as-is. Part 2 also admits
/// reports which become safe after dropping exactly one level.
fn solve(mut input: IStr) -> Result<(u32, u32)> {
    let mut part1 = 0;
    let mut part2 = 0;

    while let Some(levels) = input.try_line::<Vec<i32>>()? {
        if levels.is_empty() {
            continue;
        }

        if is_safe(levels.iter().copied()) {
            part1 += 1;
            part2 += 1;
            continue;
        }

        let dampened = (0..levels.len()).any(|n| is_safe(without(&levels, n)));
        part2 += u32::from(dampened);
    }

    Ok((part1, part2))
}

/// A report is safe if every adjacent step has an absolute difference in
/// `1..=3` and all steps share the sign fixed by the first step.
///
/// The distance check runs before the sign check, so a zero step always
/// fails as a distance violation.
fn is_safe<I>(levels: I) -> bool
where
    I: IntoIterator<Item = i32>,
{
    let mut it = levels.into_iter();

    let Some(mut prev) = it.next() else {
        return true;
    };

    let mut expected = None;

    for level in it {
        let step = level - prev;

        if !matches!(step.abs(), 1..=3) {
            return false;
        }

        let sign = step.signum();

        if *expected.get_or_insert(sign) != sign {
            return false;
        }

        prev = level;
    }

    true
}

/// The levels with the one at `skip` removed, order preserved.
fn without(levels: &[i32], skip: usize) -> impl Iterator<Item = i32> + '_ {
    levels
        .iter()
        .copied()
        .enumerate()
        .filter(move |&(i, _)| i != skip)
        .map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
    use lib::IStr;

    use super::{is_safe, solve, without};

    const EXAMPLE: &[u8] = b"7 6 4 2 1\n1 2 7 8 9\n9 7 6 2 1\n1 3 2 4 5\n8 6 4 4 1\n1 3 6 7 9\n";

    #[test]
    fn test_example() {
        let (part1, part2) = solve(IStr::new(EXAMPLE)).unwrap();
        assert_eq!(part1, 2);
        assert_eq!(part2, 4);
    }

    #[test]
    fn test_reversal() {
        // A safe report read back to front is still safe.
        let reversed: &[u8] = b"1 2 4 6 7\n9 8 7 2 1\n1 2 6 7 9\n5 4 2 3 1\n1 4 4 6 8\n9 7 6 3 1\n";
        assert_eq!(
            solve(IStr::new(EXAMPLE)).unwrap(),
            solve(IStr::new(reversed)).unwrap()
        );
    }

    #[test]
    fn test_short_reports() {
        // 0 or 1 steps, nothing to violate.
        assert_eq!(solve(IStr::new(b"5\n")).unwrap(), (1, 1));
        assert_eq!(solve(IStr::new(b"1 4\n")).unwrap(), (1, 1));

        // Too large a step, but removing either level fixes it.
        assert_eq!(solve(IStr::new(b"1 5\n")).unwrap(), (0, 1));
    }

    #[test]
    fn test_zero_step() {
        assert!(!is_safe([1, 1, 2]));
        assert!(!is_safe([2, 1, 1]));
    }

    #[test]
    fn test_mixed_signs() {
        assert!(!is_safe([1, 3, 2]));
        assert!(is_safe([1, 3, 4]));
    }

    #[test]
    fn test_long_report() {
        // Report length is unbounded.
        let levels: &[u8] = b"1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17\n";
        assert_eq!(solve(IStr::new(levels)).unwrap(), (1, 1));
    }

    #[test]
    fn test_safe_counted_once() {
        // A directly safe report contributes exactly one to each part
        // and is never run through the dampener.
        assert_eq!(solve(IStr::new(b"1 2 3 4 5\n")).unwrap(), (1, 1));
        assert_eq!(solve(IStr::new(b"1 2 3\n9 9 9\n")).unwrap(), (1, 1));
    }

    #[test]
    fn test_without() {
        let levels = [1, 2, 3];
        assert_eq!(without(&levels, 0).collect::<Vec<_>>(), [2, 3]);
        assert_eq!(without(&levels, 1).collect::<Vec<_>>(), [1, 3]);
        assert_eq!(without(&levels, 2).collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn test_blank_lines() {
        let (part1, part2) = solve(IStr::new(b"7 6 4 2 1\n\n1 3 6 7 9\n")).unwrap();
        assert_eq!(part1, 2);
        assert_eq!(part2, 2);
    }
}
