use rand::{distributions::Alphanumeric, thread_rng, Rng};

/// Toast ids are epoch millis plus a short random suffix, so ids created in
/// the same millisecond still stay unique.
pub fn generate_toast_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("{}-{}", millis, suffix)
}
