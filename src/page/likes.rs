//! Like action handler

use tracing::{debug, error, info};

use super::{Page, PageEvent};
use crate::client::{ClientError, RequestHandle, RequestId};
use crate::models::LikeResponse;

impl Page {
    /// Post a like for `product_id` (the item image was clicked).
    ///
    /// The counter is only touched once the server acknowledges with a
    /// truthy `new_likes`.
    pub fn like_product(&mut self, product_id: &str) -> RequestHandle {
        let id = RequestId::next();
        let product_id = product_id.to_string();
        let api = self.api.clone();
        let events = self.events.clone();
        let task = tokio::spawn(async move {
            let result = api.like(&product_id).await;
            let _ = events.send(PageEvent::LikeCompleted { product_id, result });
        });
        RequestHandle::new(id, task.abort_handle())
    }

    pub(super) fn apply_like(&mut self, product_id: String, result: Result<LikeResponse, ClientError>) {
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                error!("Error liking product {}: {}", product_id, e);
                return;
            }
        };

        let Some(new_likes) = response.new_likes_text() else {
            debug!(
                "Like for {} acknowledged without a count: {:?}",
                product_id, response.message
            );
            return;
        };

        let Some(item) = self
            .product_list
            .as_mut()
            .and_then(|region| region.item_mut(&product_id))
        else {
            debug!("Product {} no longer listed, like count dropped", product_id);
            return;
        };

        info!("Product {} now has {} likes", product_id, new_likes);
        item.like_count = new_likes;
        item.pulsing = true;

        let events = self.events.clone();
        let pulse = self.settings.like_pulse;
        tokio::spawn(async move {
            tokio::time::sleep(pulse).await;
            let _ = events.send(PageEvent::PulseEnded { product_id });
        });
    }

    pub(super) fn apply_pulse_end(&mut self, product_id: &str) {
        if let Some(item) = self
            .product_list
            .as_mut()
            .and_then(|region| region.item_mut(product_id))
        {
            item.pulsing = false;
        }
    }
}
