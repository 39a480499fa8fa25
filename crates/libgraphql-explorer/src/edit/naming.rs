/// Pick a name starting with `prefix` that isn't among `existing_names`.
///
/// The first candidate is `prefix` itself when no existing name starts with
/// it, else `prefix` suffixed with the number of existing names that do.
/// The suffix is bumped until the candidate is unused.
pub fn unique_name<'a, I>(prefix: &str, existing_names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let existing_names: Vec<&str> = existing_names.into_iter().collect();
    let prefixed_count =
        existing_names.iter()
            .filter(|name| name.starts_with(prefix))
            .count();

    let candidate_for = |suffix: usize| {
        if suffix == 0 {
            prefix.to_string()
        } else {
            format!("{prefix}{suffix}")
        }
    };

    let mut suffix = prefixed_count;
    let mut candidate = candidate_for(suffix);
    while existing_names.contains(&candidate.as_str()) {
        suffix += 1;
        candidate = candidate_for(suffix);
    }
    candidate
}
