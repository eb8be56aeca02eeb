/// Returns the element with the largest projected value, or `None` for an
/// empty slice. Ties go to the earliest element.
pub fn max_by<T, F>(items: &[T], projection: F) -> Option<&T>
where
    F: Fn(&T) -> f64,
{
    pick(items, projection, |candidate, best| candidate > best)
}

/// Returns the element with the smallest projected value, or `None` for an
/// empty slice. Ties go to the earliest element.
pub fn min_by<T, F>(items: &[T], projection: F) -> Option<&T>
where
    F: Fn(&T) -> f64,
{
    pick(items, projection, |candidate, best| candidate < best)
}

fn pick<T, F, B>(items: &[T], projection: F, beats: B) -> Option<&T>
where
    F: Fn(&T) -> f64,
    B: Fn(f64, f64) -> bool,
{
    let (first, rest) = items.split_first()?;
    let mut best = first;
    let mut best_value = projection(first);
    for item in rest {
        let value = projection(item);
        if beats(value, best_value) {
            best = item;
            best_value = value;
        }
    }
    Some(best)
}
