//! Point distribution for ranked match finishes.
//!
//! Points are symmetric around the median finishing position and follow an
//! adjusted Fibonacci curve: the sequence starts `1, 2` (no repeated leading
//! 1), so gaps widen towards both ends of the field. Every distribution is
//! strictly decreasing and sums to zero, which keeps the leaderboard
//! zero-sum: one player's gain is the rest of the table's loss.

/// Generates the adjusted Fibonacci sequence `1, 2, 3, 5, 8, ...` of the
/// given length.
///
/// Terms are accumulated in `i64` and clamped to `i32::MAX` on conversion,
/// so absurdly long sequences flatten at the integer ceiling instead of
/// overflowing. Callers that rely on strictly decreasing distributions
/// bound the field size well below that (see `MatchService`).
fn adjusted_fibonacci(count: usize) -> Vec<i32> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![1];
    }

    let mut fib: Vec<i64> = vec![1, 2];
    for i in 2..count {
        let next = fib[i - 1].saturating_add(fib[i - 2]);
        fib.push(next);
    }
    fib.into_iter()
        .map(|term| term.min(i32::MAX as i64) as i32)
        .collect()
}

/// Computes the full point distribution for a match with `total_players`
/// ranked participants. Index 0 is first place.
///
/// Returns an empty vec for `total_players <= 0` and `[0]` for a single
/// player (the sole player sits exactly at the median). Never panics: for
/// fields large enough that the Fibonacci terms exceed `i32`, the outermost
/// values clamp at `i32::MAX` instead of overflowing.
pub fn point_distribution(total_players: i32) -> Vec<i32> {
    if total_players <= 0 {
        return Vec::new();
    }
    if total_players == 1 {
        return vec![0];
    }

    let mut points = Vec::with_capacity(total_players as usize);

    if total_players % 2 == 1 {
        // Odd field: the middle rank gets exactly 0.
        let half = (total_players / 2) as usize;
        let fib = adjusted_fibonacci(half);

        // First place gets the largest value; the rank just above the
        // median gets 1.
        points.extend(fib.iter().rev());
        points.push(0);
        // Mirror below the median: just below gets -1, growing outward.
        points.extend(fib.iter().map(|f| -f));
    } else {
        let half = (total_players / 2) as usize;
        if half == 1 {
            return vec![1, -1];
        }

        let mut fib = adjusted_fibonacci(half);
        // The two ranks straddling the invisible midpoint must always score
        // +1 and -1, so the smallest term (innermost after mirroring) is
        // pinned to 1.
        fib[0] = 1;

        points.extend(fib.iter().rev());
        points.extend(fib.iter().map(|f| -f));
    }

    points
}

/// Points awarded to a single finishing position.
///
/// Out-of-range queries (`position` outside `1..=total_players`, or a
/// non-positive player count) fall back to 0 rather than erroring.
pub fn points_for_position(position: i32, total_players: i32) -> i32 {
    if position < 1 || position > total_players || total_players < 1 {
        return 0;
    }

    point_distribution(total_players)
        .get((position - 1) as usize)
        .copied()
        .unwrap_or(0)
}

/// Signed distance of a finishing position from the arithmetic median of
/// `1..=total_players`, independent of the point curve.
///
/// For an even field the median falls between two ranks; ties round away
/// from zero so those two ranks map to +1 and -1, matching the middle pair
/// of the point distribution. Out-of-range queries return 0.
pub fn position_from_median(position: i32, total_players: i32) -> i32 {
    if position < 1 || position > total_players || total_players < 1 {
        return 0;
    }

    let median = (total_players as f64 + 1.0) / 2.0;
    (median - position as f64).round() as i32
}
