//! End-to-end driver for one generation attempt.

use chrono::Utc;
use tokio::sync::watch;
use vidgen_core::encoding;
use vidgen_core::history::HistoryEntry;
use vidgen_core::relay::GenerateVideoRequest;
use vidgen_core::request::GenerationRequest;
use vidgen_store::{HistoryStore, KvStore, SettingsStore};

use crate::error::GenerateError;
use crate::progress::ProgressTicker;
use crate::relay::RelayApi;

/// What a successful attempt hands back to the caller.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// The video URL, for immediate download/display.
    pub video_url: String,
    /// The history entry that was just recorded (already at index 0).
    pub entry: HistoryEntry,
}

/// Orchestrates generation attempts over an injected store and relay.
///
/// Holds no per-attempt state; the progress channel is reset at the start of
/// each attempt, so interleaved attempts on one `Generator` would fight over
/// it — callers run one attempt at a time, matching the single-submission UI.
pub struct Generator<S, R> {
    kv: S,
    relay: R,
    progress: watch::Sender<u8>,
}

impl<S: KvStore, R: RelayApi> Generator<S, R> {
    pub fn new(kv: S, relay: R) -> Self {
        let (progress, _) = watch::channel(0);
        Self { kv, relay, progress }
    }

    /// Observe the synthetic progress percentage (`0..=100`).
    pub fn subscribe_progress(&self) -> watch::Receiver<u8> {
        self.progress.subscribe()
    }

    /// Run one generation attempt to its terminal outcome.
    ///
    /// Missing input and missing credential fail before any network call.
    /// Otherwise exactly one relay call is made; on success the resulting
    /// entry is prepended to history, on failure progress is reset to zero
    /// and the error is surfaced as-is. There is no cancellation of an
    /// in-flight call and no client-side timeout.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationOutcome, GenerateError> {
        request
            .validate()
            .map_err(|e| GenerateError::MissingInput(e.to_string()))?;

        let api_key =
            SettingsStore::api_key(&self.kv)?.ok_or(GenerateError::MissingCredential)?;

        let start_image = encoding::image_to_data_url(request.start_image())
            .map_err(|e| GenerateError::MissingInput(e.to_string()))?;

        let relay_request = GenerateVideoRequest {
            api_key,
            start_image: start_image.clone(),
            prompt: request.prompt.clone(),
            negative_prompt: request.negative_prompt.clone(),
            aspect_ratio: request.aspect_ratio.as_str().to_string(),
            cfg_scale: request.cfg_scale.value(),
        };

        let ticker = ProgressTicker::start(self.progress.clone());

        match self.relay.generate_video(&relay_request).await {
            Ok(video_url) => {
                ticker.complete().await;

                let entry =
                    HistoryEntry::from_request(Utc::now(), request, &video_url, &start_image);
                HistoryStore::record(&self.kv, entry.clone())?;

                tracing::info!(entry_id = %entry.id, %video_url, "Video generated");
                Ok(GenerationOutcome { video_url, entry })
            }
            Err(err) => {
                ticker.reset().await;
                tracing::error!(error = %err, "Generation failed");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use vidgen_core::types::{AspectRatio, CfgScale};
    use vidgen_store::MemoryKvStore;

    use super::*;
    use crate::relay::RelayError;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR";

    /// Relay fake that counts calls and replays a scripted response.
    struct FakeRelay {
        calls: AtomicUsize,
        last_request: Mutex<Option<GenerateVideoRequest>>,
        response: Result<String, &'static str>,
    }

    impl FakeRelay {
        fn succeeding(url: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
                response: Ok(url.to_string()),
            }
        }

        fn failing(message: &'static str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
                response: Err(message),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RelayApi for Arc<FakeRelay> {
        async fn generate_video(
            &self,
            request: &GenerateVideoRequest,
        ) -> Result<String, RelayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            match &self.response {
                Ok(url) => Ok(url.clone()),
                Err(msg) => Err(RelayError::Transport(msg.to_string())),
            }
        }
    }

    fn generator_with(
        relay: Arc<FakeRelay>,
    ) -> (Generator<MemoryKvStore, Arc<FakeRelay>>, MemoryKvStore) {
        let kv = MemoryKvStore::new();
        (Generator::new(kv.clone(), relay), kv)
    }

    fn valid_request() -> GenerationRequest {
        GenerationRequest::new("a cat running")
            .with_start_image(PNG_MAGIC.to_vec())
            .with_aspect_ratio(AspectRatio::Landscape)
            .with_cfg_scale(CfgScale::new(0.5).unwrap())
    }

    #[tokio::test]
    async fn empty_prompt_fails_without_a_relay_call() {
        let relay = Arc::new(FakeRelay::succeeding("https://x/video.mp4"));
        let (generator, kv) = generator_with(relay.clone());
        SettingsStore::set_api_key(&kv, "r8_test").unwrap();

        let request = GenerationRequest::new("  ").with_start_image(PNG_MAGIC.to_vec());
        let result = generator.generate(&request).await;

        assert_matches!(result, Err(GenerateError::MissingInput(_)));
        assert_eq!(relay.call_count(), 0);
        assert!(HistoryStore::list(&kv).unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_image_fails_without_a_relay_call() {
        let relay = Arc::new(FakeRelay::succeeding("https://x/video.mp4"));
        let (generator, kv) = generator_with(relay.clone());
        SettingsStore::set_api_key(&kv, "r8_test").unwrap();

        let request = GenerationRequest::new("a cat running");
        assert_matches!(
            generator.generate(&request).await,
            Err(GenerateError::MissingInput(_))
        );
        assert_eq!(relay.call_count(), 0);
    }

    #[tokio::test]
    async fn missing_credential_fails_before_the_network() {
        let relay = Arc::new(FakeRelay::succeeding("https://x/video.mp4"));
        let (generator, _kv) = generator_with(relay.clone());

        assert_matches!(
            generator.generate(&valid_request()).await,
            Err(GenerateError::MissingCredential)
        );
        assert_eq!(relay.call_count(), 0);
    }

    #[tokio::test]
    async fn success_records_one_entry_at_index_zero() {
        let relay = Arc::new(FakeRelay::succeeding("https://x/video.mp4"));
        let (generator, kv) = generator_with(relay.clone());
        SettingsStore::set_api_key(&kv, "r8_test").unwrap();

        let request = valid_request().with_negative_prompt("blurry");
        let outcome = generator.generate(&request).await.unwrap();

        assert_eq!(outcome.video_url, "https://x/video.mp4");
        assert_eq!(relay.call_count(), 1);

        let entries = HistoryStore::list(&kv).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.id, outcome.entry.id);
        assert_eq!(entry.prompt, "a cat running");
        assert_eq!(entry.negative_prompt, "blurry");
        assert_eq!(entry.aspect_ratio, AspectRatio::Landscape);
        assert_eq!(entry.cfg_scale.value(), 0.5);
        assert_eq!(entry.video_url, "https://x/video.mp4");
        assert!(entry.start_image.starts_with("data:image/png;base64,"));

        // The relay saw the credential and the encoded image.
        let seen = relay.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(seen.api_key, "r8_test");
        assert_eq!(seen.aspect_ratio, "16:9");
        assert_eq!(seen.cfg_scale, 0.5);
        assert_eq!(seen.start_image, entry.start_image);

        // Progress settles at full on success.
        assert_eq!(*generator.subscribe_progress().borrow(), 100);
    }

    #[tokio::test]
    async fn repeated_successes_prepend_newest_first() {
        let relay = Arc::new(FakeRelay::succeeding("https://x/video.mp4"));
        let (generator, kv) = generator_with(relay.clone());
        SettingsStore::set_api_key(&kv, "r8_test").unwrap();

        let first = generator.generate(&valid_request()).await.unwrap();
        let request = GenerationRequest::new("a dog sleeping").with_start_image(PNG_MAGIC.to_vec());
        generator.generate(&request).await.unwrap();

        let entries = HistoryStore::list(&kv).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].prompt, "a dog sleeping");
        assert_eq!(entries[1].id, first.entry.id);
    }

    #[tokio::test]
    async fn relay_failure_is_terminal_and_resets_progress() {
        let relay = Arc::new(FakeRelay::failing("connection refused"));
        let (generator, kv) = generator_with(relay.clone());
        SettingsStore::set_api_key(&kv, "r8_test").unwrap();

        let result = generator.generate(&valid_request()).await;

        assert_matches!(result, Err(GenerateError::Transport(_)));
        // One attempt, no retry.
        assert_eq!(relay.call_count(), 1);
        assert!(HistoryStore::list(&kv).unwrap().is_empty());
        assert_eq!(*generator.subscribe_progress().borrow(), 0);
    }

    #[tokio::test]
    async fn garbage_image_bytes_fail_before_the_network() {
        let relay = Arc::new(FakeRelay::succeeding("https://x/video.mp4"));
        let (generator, kv) = generator_with(relay.clone());
        SettingsStore::set_api_key(&kv, "r8_test").unwrap();

        let request =
            GenerationRequest::new("a cat running").with_start_image(b"not an image".to_vec());
        assert_matches!(
            generator.generate(&request).await,
            Err(GenerateError::MissingInput(_))
        );
        assert_eq!(relay.call_count(), 0);
    }
}
