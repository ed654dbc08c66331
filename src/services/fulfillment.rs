use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::db::queries;
use crate::models::{QueuedMessage, Suggestion, WorkItem};
use crate::state::AppState;

const MAX_SUGGESTIONS: usize = 2;

/// Poll the work queue forever. Each tick drains at most one batch; failures
/// are logged and retried on a later tick.
pub async fn run_worker_loop(state: Arc<AppState>) {
    let mut ticker = tokio::time::interval(Duration::from_secs(state.config.worker_poll_secs));

    loop {
        ticker.tick().await;
        match drain_batch(&state).await {
            Ok(0) => {}
            Ok(processed) => tracing::info!(processed, "fulfillment batch complete"),
            Err(e) => tracing::error!(error = %e, "fulfillment batch failed"),
        }
    }
}

/// Take up to one batch of pending work items and process each in turn.
/// Returns the number of items fulfilled and deleted.
///
/// Delivery is process-then-delete: an item is removed from the queue only
/// after search, persist, and notify all succeed, so a failure partway
/// leaves it queued for redelivery. An item whose payload does not decode
/// is deleted immediately so it cannot wedge the queue.
pub async fn drain_batch(state: &Arc<AppState>) -> anyhow::Result<usize> {
    let messages = state.queue.receive(state.config.worker_batch_size).await?;

    let mut processed = 0;
    for message in messages {
        let item: WorkItem = match serde_json::from_str(&message.body) {
            Ok(item) => item,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    message_id = %message.message_id,
                    "dropping undecodable work item"
                );
                state.queue.delete(message.handle).await?;
                continue;
            }
        };

        match process_item(state, &message, &item).await {
            Ok(()) => {
                state.queue.delete(message.handle).await?;
                processed += 1;
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    message_id = %message.message_id,
                    "fulfillment failed, item left queued"
                );
            }
        }
    }

    Ok(processed)
}

async fn process_item(
    state: &Arc<AppState>,
    message: &QueuedMessage,
    item: &WorkItem,
) -> anyhow::Result<()> {
    tracing::info!(
        message_id = %message.message_id,
        location = %item.location,
        cuisine = %item.cuisine,
        "processing work item"
    );

    let places = state.search.search(&item.cuisine, &item.location).await?;
    let now = Utc::now().naive_utc();

    let mut summary = String::new();
    for (idx, place) in places.iter().take(MAX_SUGGESTIONS).enumerate() {
        let n = idx + 1;
        let address = short_address(&place.formatted_address);

        let suggestion = Suggestion {
            id: format!("{}-{n}", message.message_id),
            restaurant_name: place.name.clone(),
            address: address.to_string(),
            rating: place.rating.round() as i64,
            cuisine: item.cuisine.clone(),
            created_at: now,
        };
        {
            let db = state.db.lock().unwrap();
            queries::insert_suggestion(&db, &suggestion)?;
        }

        summary.push_str(&format!("{n}. {} at {address} ", place.name));
    }

    let text = format!(
        "Hello! Here are my {} restaurant suggestions for you. {summary}",
        item.cuisine
    );
    state
        .messaging
        .send_message(&format!("+1{}", item.phone), &text)
        .await?;

    Ok(())
}

// Street address only; the search API returns "street, city, state zip".
fn short_address(formatted: &str) -> &str {
    formatted.split(',').next().unwrap_or(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_address_takes_first_segment() {
        assert_eq!(
            short_address("90 3rd Ave, New York, NY 10003"),
            "90 3rd Ave"
        );
    }

    #[test]
    fn test_short_address_without_commas() {
        assert_eq!(short_address("90 3rd Ave"), "90 3rd Ave");
    }
}
