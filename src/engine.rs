//! Page engine: wires the API, modal, toasts, overlay, and carousel.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, error, info};

use crate::{
    api::{ApplicationForm, ContactForm, FormOutcome, FormTarget, VideoApi, VideoKind},
    config::Config,
    decor::{self, ParticleSpec},
    embed::{self, VideoSource},
    error::VitrinaError,
    notify::{LoadingOverlay, Toast, ToastId, ToastKind, ToastRack},
    page::{PageHooks, VideoModal},
    slider::SliderController,
};

/// Drives one page's behavior.
///
/// Every feature activates only when its page hook is present; a missing
/// hook means the page does not carry the feature and the operation is a
/// silent no-op. Failures never propagate out of the engine: they degrade
/// to an error toast and the engine stays usable.
///
/// Must be created inside a Tokio runtime when the page carries a
/// carousel.
pub struct PageEngine {
    config: Config,
    hooks: PageHooks,
    api: Box<dyn VideoApi>,
    toasts: ToastRack,
    overlay: LoadingOverlay,
    modal: VideoModal,
    slider: Option<SliderController>,
}

impl PageEngine {
    pub fn new(config: Config, hooks: PageHooks, api: Box<dyn VideoApi>) -> Self {
        let slider = hooks.slider.as_ref().map(|s| {
            SliderController::new(s.items.clone(), s.metrics, config.slider.clone())
        });

        info!("🧩 Page engine ready");
        info!("   Video modal: {}", hooks.video_modal);
        info!("   Forms: application={} contact={}", hooks.application_form, hooks.contact_form);
        info!(
            "   Carousel: {}",
            slider.as_ref().map(|s| s.len()).unwrap_or(0)
        );

        Self {
            toasts: ToastRack::new(config.toast.duration()),
            overlay: LoadingOverlay::new(config.toast.overlay_fade()),
            modal: VideoModal::default(),
            slider,
            config,
            hooks,
            api,
        }
    }

    /// Load a video and open the modal with its embed markup.
    ///
    /// One fire-and-forget request: no timeout, no retry, no
    /// de-duplication. Overlapping calls race freely and the later
    /// response wins the modal, exactly as the page behaves.
    pub async fn play_video(&mut self, kind: VideoKind, id: u64) {
        if !self.hooks.video_modal {
            debug!("no video modal on this page, skipping {} video {}", kind, id);
            return;
        }

        info!("🎥 Loading {} video {}", kind, id);
        self.overlay_show();
        let result = self.api.fetch_video(kind, id).await;
        self.overlay_hide();

        match result {
            Ok(payload) if payload.success => {
                let source = VideoSource::from_parts(
                    payload.video_url,
                    payload.video_file,
                    payload.preview_image,
                );
                self.modal.open(&embed::render(&source));
                debug!("{} video {} playing, source available: {}", kind, id, source.is_available());
            }
            Ok(_) => {
                debug!("{} video {} has nothing to play", kind, id);
                self.toast(ToastKind::Error, "Video not available", None);
            }
            Err(err) => {
                error!("{} video {} load failed: {}", kind, id, err);
                let message = VitrinaError::Api(err).user_message();
                self.toast(ToastKind::Error, message, None);
            }
        }
    }

    /// Close the video modal, dropping its content
    pub fn close_video(&mut self) {
        self.modal.close();
    }

    /// Submit a course application in the background.
    ///
    /// Returns the parsed outcome when the server answered; on success the
    /// caller resets its form and closes the application modal.
    pub async fn submit_application(&mut self, form: ApplicationForm) -> Option<FormOutcome> {
        if !self.hooks.application_form {
            debug!("no application form on this page, skipping submit");
            return None;
        }

        info!("📨 Submitting application for course {}", form.course);
        self.deliver(FormTarget::Application, form.fields()).await
    }

    /// Submit the contact form in the background.
    ///
    /// Returns the parsed outcome when the server answered; on success the
    /// caller resets its form.
    pub async fn submit_contact(&mut self, form: ContactForm) -> Option<FormOutcome> {
        if !self.hooks.contact_form {
            debug!("no contact form on this page, skipping submit");
            return None;
        }

        info!("📨 Submitting contact form");
        self.deliver(FormTarget::Contact, form.fields()).await
    }

    async fn deliver(
        &mut self,
        target: FormTarget,
        fields: Vec<(&'static str, String)>,
    ) -> Option<FormOutcome> {
        self.overlay_show();
        let result = self.api.submit_form(target, fields).await;
        self.overlay_hide();

        match result {
            Ok(outcome) => {
                if outcome.success {
                    let message = outcome.message.clone().unwrap_or_default();
                    self.toast(
                        ToastKind::Success,
                        message,
                        Some(target.success_title().to_string()),
                    );
                } else {
                    debug!("{} form rejected by validation", target);
                    self.toast(
                        ToastKind::Error,
                        outcome.flattened_errors(),
                        Some("Error".to_string()),
                    );
                }
                Some(outcome)
            }
            Err(err) => {
                error!("{} form delivery failed: {}", target, err);
                let message = VitrinaError::Api(err).user_message();
                self.toast(ToastKind::Error, message, None);
                None
            }
        }
    }

    /// Particle field for the hero backdrop; empty when the page has no
    /// particles host
    pub fn particles<R: Rng>(&self, viewport_width: u32, rng: &mut R) -> Vec<ParticleSpec> {
        if !self.hooks.particles_host {
            return Vec::new();
        }
        decor::particles(viewport_width, &self.config.decor, rng)
    }

    /// Advance time-based state: complete the overlay fade and expire
    /// toasts, returning the ones that just left
    pub fn sweep(&mut self, now: Instant) -> Vec<Toast> {
        self.overlay.sweep(now);
        self.toasts.sweep(now)
    }

    /// Close a toast early (its close button)
    pub fn dismiss_toast(&mut self, id: ToastId) -> bool {
        self.toasts.dismiss(id)
    }

    pub fn toasts(&self) -> &[Toast] {
        self.toasts.active()
    }

    pub fn modal(&self) -> &VideoModal {
        &self.modal
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    /// The carousel controller, when the page carries one
    pub fn slider(&self) -> Option<&SliderController> {
        self.slider.as_ref()
    }

    fn overlay_show(&mut self) {
        if self.hooks.loading_overlay {
            self.overlay.show();
        }
    }

    fn overlay_hide(&mut self) {
        if self.hooks.loading_overlay {
            self.overlay.begin_hide(Instant::now());
        }
    }

    fn toast(&mut self, kind: ToastKind, message: impl Into<String>, title: Option<String>) {
        if !self.hooks.toast_container {
            return;
        }
        self.toasts.push(kind, message, title, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, VideoPayload};
    use crate::page::SliderHooks;
    use crate::slider::{SlideItem, TrackMetrics};
    use async_trait::async_trait;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Default)]
    struct StubState {
        video: Option<Result<VideoPayload, ApiError>>,
        form: Option<Result<FormOutcome, ApiError>>,
        video_calls: usize,
        form_fields: Option<Vec<(&'static str, String)>>,
    }

    /// Scripted API double; clones share one script so tests keep a handle
    /// for assertions after boxing it into the engine.
    #[derive(Clone, Default)]
    struct StubApi {
        state: Arc<Mutex<StubState>>,
    }

    impl StubApi {
        fn with_video(response: Result<VideoPayload, ApiError>) -> Self {
            let stub = Self::default();
            stub.state.lock().unwrap().video = Some(response);
            stub
        }

        fn with_form(response: Result<FormOutcome, ApiError>) -> Self {
            let stub = Self::default();
            stub.state.lock().unwrap().form = Some(response);
            stub
        }

        fn script_video(&self, response: Result<VideoPayload, ApiError>) {
            self.state.lock().unwrap().video = Some(response);
        }

        fn video_calls(&self) -> usize {
            self.state.lock().unwrap().video_calls
        }

        fn form_fields(&self) -> Option<Vec<(&'static str, String)>> {
            self.state.lock().unwrap().form_fields.clone()
        }
    }

    #[async_trait]
    impl VideoApi for StubApi {
        async fn fetch_video(&self, _kind: VideoKind, _id: u64) -> Result<VideoPayload, ApiError> {
            let mut state = self.state.lock().unwrap();
            state.video_calls += 1;
            state.video.take().unwrap_or(Err(ApiError::Request {
                reason: "no scripted response".to_string(),
            }))
        }

        async fn submit_form(
            &self,
            _target: FormTarget,
            fields: Vec<(&'static str, String)>,
        ) -> Result<FormOutcome, ApiError> {
            let mut state = self.state.lock().unwrap();
            state.form_fields = Some(fields);
            state.form.take().unwrap_or(Err(ApiError::Request {
                reason: "no scripted response".to_string(),
            }))
        }
    }

    fn hooks_with_everything() -> PageHooks {
        PageHooks {
            video_modal: true,
            toast_container: true,
            loading_overlay: true,
            application_form: true,
            contact_form: true,
            particles_host: true,
            slider: None,
        }
    }

    fn engine_with(stub: &StubApi) -> PageEngine {
        PageEngine::new(
            Config::default(),
            hooks_with_everything(),
            Box::new(stub.clone()),
        )
    }

    fn youtube_payload() -> VideoPayload {
        VideoPayload {
            success: true,
            video_url: Some("https://youtu.be/dQw4w9WgXcQ".to_string()),
            ..VideoPayload::default()
        }
    }

    #[tokio::test]
    async fn successful_load_opens_the_modal() {
        let stub = StubApi::with_video(Ok(youtube_payload()));
        let mut engine = engine_with(&stub);

        engine.play_video(VideoKind::Course, 3).await;

        assert!(engine.modal().is_open());
        let content = engine.modal().content().unwrap();
        assert!(content.contains("youtube.com/embed/dQw4w9WgXcQ"));
        assert!(engine.toasts().is_empty());

        assert!(engine.overlay_visible(), "overlay still fading out");
        engine.sweep(Instant::now() + Duration::from_secs(1));
        assert!(!engine.overlay_visible());
    }

    #[tokio::test]
    async fn missing_video_raises_an_error_toast() {
        let stub = StubApi::with_video(Ok(VideoPayload::default()));
        let mut engine = engine_with(&stub);

        engine.play_video(VideoKind::Testimonial, 9).await;

        assert!(!engine.modal().is_open());
        let toasts = engine.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(toasts[0].message, "Video not available");
        assert_eq!(toasts[0].title, None);

        let expired = engine.sweep(Instant::now() + Duration::from_secs(6));
        assert_eq!(expired.len(), 1);
        assert!(engine.toasts().is_empty());
    }

    #[tokio::test]
    async fn transport_failure_degrades_to_a_toast() {
        let stub = StubApi::with_video(Err(ApiError::Request {
            reason: "connection refused".to_string(),
        }));
        let mut engine = engine_with(&stub);

        engine.play_video(VideoKind::Teacher, 1).await;

        assert!(!engine.modal().is_open());
        assert_eq!(engine.toasts().len(), 1);
        assert_eq!(
            engine.toasts()[0].message,
            "Xatolik yuz berdi. Iltimos, qayta urinib ko'ring."
        );

        stub.script_video(Ok(youtube_payload()));
        engine.play_video(VideoKind::Teacher, 1).await;
        assert!(engine.modal().is_open(), "engine stays usable after a failure");
        assert_eq!(stub.video_calls(), 2);
    }

    #[tokio::test]
    async fn pages_without_a_modal_skip_video_loads() {
        let stub = StubApi::with_video(Ok(youtube_payload()));
        let hooks = PageHooks {
            video_modal: false,
            ..hooks_with_everything()
        };
        let mut engine = PageEngine::new(Config::default(), hooks, Box::new(stub.clone()));

        engine.play_video(VideoKind::Course, 3).await;

        assert_eq!(stub.video_calls(), 0, "no request without a modal to fill");
        assert!(engine.toasts().is_empty());
        assert!(!engine.overlay_visible());
    }

    #[tokio::test]
    async fn application_success_posts_fields_and_toasts_the_title() {
        let stub = StubApi::with_form(Ok(FormOutcome {
            success: true,
            message: Some("We will contact you soon.".to_string()),
            errors: None,
        }));
        let mut engine = engine_with(&stub);

        let form = ApplicationForm {
            name: "Aziza".to_string(),
            phone: "+998901234567".to_string(),
            email: "aziza@example.com".to_string(),
            course: 4,
            message: String::new(),
        };
        let outcome = engine.submit_application(form.clone()).await;

        assert!(outcome.is_some_and(|o| o.success));
        assert_eq!(stub.form_fields(), Some(form.fields()));

        let toasts = engine.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[0].title.as_deref(), Some("Ariza Yuborildi!"));
        assert_eq!(toasts[0].message, "We will contact you soon.");
    }

    #[tokio::test]
    async fn validation_failure_flattens_field_errors() {
        let errors = BTreeMap::from([
            (
                "email".to_string(),
                vec!["Enter a valid email address.".to_string()],
            ),
            (
                "phone".to_string(),
                vec!["Enter a valid phone number.".to_string()],
            ),
        ]);
        let stub = StubApi::with_form(Ok(FormOutcome {
            success: false,
            message: None,
            errors: Some(errors),
        }));
        let mut engine = engine_with(&stub);

        let outcome = engine
            .submit_contact(ContactForm {
                name: "Aziza".to_string(),
                phone: "no".to_string(),
                email: "no".to_string(),
                message: "Salom".to_string(),
            })
            .await;

        assert!(outcome.is_some_and(|o| !o.success));
        let toasts = engine.toasts();
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(toasts[0].title.as_deref(), Some("Error"));
        assert_eq!(
            toasts[0].message,
            "Enter a valid email address., Enter a valid phone number."
        );
    }

    #[tokio::test]
    async fn contact_transport_failure_returns_none() {
        let stub = StubApi::with_form(Err(ApiError::Status { code: 500 }));
        let mut engine = engine_with(&stub);

        let outcome = engine
            .submit_contact(ContactForm {
                name: "Aziza".to_string(),
                phone: "+998901234567".to_string(),
                email: "aziza@example.com".to_string(),
                message: "Salom".to_string(),
            })
            .await;

        assert!(outcome.is_none());
        assert_eq!(engine.toasts()[0].kind, ToastKind::Error);
        assert_eq!(engine.toasts()[0].title, None);
    }

    #[tokio::test]
    async fn pages_without_a_toast_container_drop_notifications() {
        let stub = StubApi::with_video(Ok(VideoPayload::default()));
        let hooks = PageHooks {
            toast_container: false,
            ..hooks_with_everything()
        };
        let mut engine = PageEngine::new(Config::default(), hooks, Box::new(stub.clone()));

        engine.play_video(VideoKind::Lesson, 2).await;

        assert!(engine.toasts().is_empty());
        assert!(!engine.modal().is_open());
    }

    #[tokio::test]
    async fn slider_comes_up_only_with_the_hook() {
        let stub = StubApi::default();
        let engine = engine_with(&stub);
        assert!(engine.slider().is_none());

        let hooks = PageHooks {
            slider: Some(SliderHooks {
                items: vec![
                    SlideItem::new(1, "Python"),
                    SlideItem::new(2, "Frontend"),
                    SlideItem::new(3, "Backend"),
                ],
                metrics: TrackMetrics::new(1200.0, 300.0, 28.8),
            }),
            ..hooks_with_everything()
        };
        let engine = PageEngine::new(Config::default(), hooks, Box::new(stub.clone()));
        let slider = engine.slider().unwrap();
        assert_eq!(slider.len(), 3);
    }

    #[tokio::test]
    async fn particles_need_their_host_element() {
        let stub = StubApi::default();
        let engine = engine_with(&stub);
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(engine.particles(1200, &mut rng).len(), 20);

        let hooks = PageHooks {
            particles_host: false,
            ..hooks_with_everything()
        };
        let engine = PageEngine::new(Config::default(), hooks, Box::new(stub.clone()));
        assert!(engine.particles(1200, &mut rng).is_empty());
    }
}
