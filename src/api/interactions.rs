use chrono::{Duration, Utc};

use crate::api::{ApiError, Identity, require_login};
use crate::db::model::ContactModel;
use crate::db::models::InteractionCount;

/// Days of history the heatmap consumes, ending today.
pub const WINDOW_DAYS: i64 = 365;

/// Daily interaction counts over the trailing window. With `is_self`
/// the counts cover all of the caller's activity; otherwise they are
/// narrowed to the named contact.
pub async fn interaction_counts(
    model: &dyn ContactModel,
    identity: &Identity,
    is_self: bool,
    contact_id: Option<&str>,
) -> Result<Vec<InteractionCount>, ApiError> {
    let user_id = require_login(identity, "interactionCounts")?;
    let end = Utc::now().date_naive();
    let start = end - Duration::days(WINDOW_DAYS);
    let contact = if is_self { None } else { contact_id };
    Ok(model
        .interaction_counts(user_id, contact, start, end)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    use crate::db::memory::MemoryModel;

    #[tokio::test]
    async fn counts_require_a_caller_identity() {
        let model = MemoryModel::new();
        let err = interaction_counts(&model, &Identity::anonymous(), true, None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "please login to interactionCounts");
    }

    #[tokio::test]
    async fn counts_are_bucketed_per_day_within_the_window() {
        let model = MemoryModel::new();
        let now = Utc::now();
        let yesterday = now - Duration::days(1);

        model.record_interaction("user-a", "c1", now);
        model.record_interaction("user-a", "c1", now);
        model.record_interaction("user-a", "c1", yesterday);
        // Outside the 365-day window.
        model.record_interaction("user-a", "c1", now - Duration::days(400));
        // Someone else's activity.
        model.record_interaction("user-b", "c1", now);

        let counts = interaction_counts(&model, &Identity::user("user-a"), false, Some("c1"))
            .await
            .unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].date, yesterday.date_naive());
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[1].date, now.date_naive());
        assert_eq!(counts[1].count, 2);
    }

    #[tokio::test]
    async fn self_counts_span_every_contact() {
        let model = MemoryModel::new();
        let now = Utc::now();
        model.record_interaction("user-a", "c1", now);
        model.record_interaction("user-a", "c2", now);

        let counts = interaction_counts(&model, &Identity::user("user-a"), true, Some("c1"))
            .await
            .unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].count, 2);
    }
}
