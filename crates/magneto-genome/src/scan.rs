/// Report whether `seq` holds at least `min_run` consecutive equal bases.
///
/// Bases are compared ASCII case-insensitively. The scan stops early once the
/// bases left cannot extend the current run to `min_run`.
pub fn has_run(seq: &[u8], min_run: usize) -> bool {
    let Some((&first, rest)) = seq.split_first() else {
        return false;
    };
    if min_run <= 1 {
        return true;
    }

    let mut previous = first.to_ascii_lowercase();
    let mut run = 1;
    for (index, &base) in rest.iter().enumerate() {
        if run + (rest.len() - index) < min_run {
            return false;
        }

        let base = base.to_ascii_lowercase();
        if base == previous {
            run += 1;
            if run >= min_run {
                return true;
            }
        } else {
            previous = base;
            run = 1;
        }
    }
    false
}
