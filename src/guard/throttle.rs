use super::ConfirmationTag;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;
use tokio::sync::Mutex;

/// Steam rejects a confirmation key that was already used for the same tag and second.
const KEY_WINDOW: Duration = Duration::from_secs(1);
const KEY_WINDOW_MARGIN: Duration = Duration::from_millis(10);

/// Keeps confirmation keys for the same tag at least one second apart.
#[derive(Debug, Default)]
pub struct KeyThrottle {
    last_used: Mutex<HashMap<String, Instant>>,
}

impl KeyThrottle {
    /// Creates a new [`KeyThrottle`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until a key for `tag` can be generated, then records its use.
    ///
    /// The lock is held while sleeping so concurrent callers for any tag queue up behind each
    /// other.
    pub async fn wait(&self, tag: ConfirmationTag) {
        let key = tag.to_string();
        let mut last_used = self.last_used.lock().await;

        if let Some(last) = last_used.get(&key) {
            let elapsed = last.elapsed();

            if elapsed < KEY_WINDOW {
                let wait = KEY_WINDOW - elapsed + KEY_WINDOW_MARGIN;

                log::debug!("Throttling confirmation key for {key} by {}ms", wait.as_millis());
                tokio::time::sleep(wait).await;
            }
        }

        last_used.retain(|_tag, last| last.elapsed() < KEY_WINDOW);
        last_used.insert(key, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn waits_for_repeated_tag() {
        let throttle = KeyThrottle::new();
        let start = tokio::time::Instant::now();

        throttle.wait(ConfirmationTag::Conf).await;
        throttle.wait(ConfirmationTag::Conf).await;

        assert!(start.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn forgets_tags_outside_the_window() {
        let throttle = KeyThrottle::new();

        throttle.wait(ConfirmationTag::Details(1)).await;
        throttle.wait(ConfirmationTag::Details(2)).await;
        tokio::time::advance(Duration::from_secs(2)).await;
        throttle.wait(ConfirmationTag::Details(3)).await;

        let last_used = throttle.last_used.lock().await;

        assert_eq!(last_used.len(), 1);
        assert!(last_used.contains_key("details3"));
    }

    #[tokio::test(start_paused = true)]
    async fn does_not_wait_for_different_tags() {
        let throttle = KeyThrottle::new();
        let start = tokio::time::Instant::now();

        throttle.wait(ConfirmationTag::Allow).await;
        throttle.wait(ConfirmationTag::Cancel).await;

        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
