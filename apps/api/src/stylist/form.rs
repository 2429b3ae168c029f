//! Form controller: field state, touched tracking, and submission gating.
//!
//! Lifecycle: `Idle → Submitting → {Success, Failure}`; `reset()` returns any
//! phase to a fresh `Idle`, `dismiss_error()` returns `Failure` to `Idle`
//! while keeping the entered values.

use tracing::{debug, info, warn};

use crate::stylist::models::{Recommendation, RecommendationRequest};
use crate::stylist::recommender::{RecommendationError, Recommender};
use crate::stylist::validation::{
    char_len, validate, Field, OCCASION_MAX_LENGTH, OCCASION_MIN_LENGTH,
};

/// Where the form is in its submit cycle. Loading, result and error are
/// mutually exclusive by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success(Recommendation),
    /// Banner message, never empty.
    Failure(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FieldState {
    value: String,
    message: String,
    touched: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    occasion: FieldState,
    gender: FieldState,
    preferences: FieldState,
    phase: FormPhase,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Occasion => &self.occasion,
            Field::Gender => &self.gender,
            Field::Preferences => &self.preferences,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Occasion => &mut self.occasion,
            Field::Gender => &mut self.gender,
            Field::Preferences => &mut self.preferences,
        }
    }

    #[allow(dead_code)]
    pub fn value(&self, field: Field) -> &str {
        &self.field(field).value
    }

    /// Last computed validation message, shown or not.
    #[allow(dead_code)]
    pub fn message(&self, field: Field) -> &str {
        &self.field(field).message
    }

    #[allow(dead_code)]
    pub fn is_touched(&self, field: Field) -> bool {
        self.field(field).touched
    }

    /// The message the UI should display next to `field`.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        let state = self.field(field);
        (state.touched && !state.message.is_empty()).then_some(state.message.as_str())
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting)
    }

    #[allow(dead_code)]
    pub fn result(&self) -> Option<&Recommendation> {
        match &self.phase {
            FormPhase::Success(rec) => Some(rec),
            _ => None,
        }
    }

    #[allow(dead_code)]
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            FormPhase::Failure(msg) => Some(msg),
            _ => None,
        }
    }

    /// Unconstrained edit. Re-validates only a field that was already touched.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let state = self.field_mut(field);
        state.value = value.into();
        if state.touched {
            state.message = validate(field, &state.value);
        }
    }

    /// Marks `field` as having lost focus and validates it.
    pub fn touch(&mut self, field: Field) {
        let state = self.field_mut(field);
        state.touched = true;
        state.message = validate(field, &state.value);
    }

    /// Fills the occasion from a quick-pick chip.
    #[allow(dead_code)]
    pub fn apply_suggestion(&mut self, occasion: &str) {
        self.set_field(Field::Occasion, occasion);
    }

    /// Character counter shown under the occasion box, e.g. `15/300`.
    #[allow(dead_code)]
    pub fn occasion_counter(&self) -> String {
        format!("{}/{}", char_len(&self.occasion.value), OCCASION_MAX_LENGTH)
    }

    /// Enables the submit action. Reads stored messages, so an untouched
    /// invalid field does not disable submission; `begin_submit` re-checks.
    #[allow(dead_code)]
    pub fn is_form_valid(&self) -> bool {
        Field::ALL.iter().all(|f| self.field(*f).message.is_empty())
            && char_len(self.occasion.value.trim()) >= OCCASION_MIN_LENGTH
            && !self.gender.value.is_empty()
    }

    #[allow(dead_code)]
    pub fn can_submit(&self) -> bool {
        self.is_form_valid() && !self.is_loading()
    }

    /// Validates every field, marks all touched, and enters `Submitting`.
    ///
    /// Returns `None` without changing phase when validation blocks the
    /// submit or a request is already outstanding.
    pub fn begin_submit(&mut self) -> Option<RecommendationRequest> {
        if self.is_loading() {
            debug!("Submit ignored: a recommendation request is already outstanding");
            return None;
        }

        for field in Field::ALL {
            self.touch(field);
        }

        let blocked = Field::ALL.iter().any(|f| !self.field(*f).message.is_empty())
            || self.occasion.value.trim().is_empty()
            || self.gender.value.trim().is_empty();
        if blocked {
            debug!("Submit blocked by validation");
            return None;
        }

        self.phase = FormPhase::Submitting;
        Some(RecommendationRequest {
            occasion: self.occasion.value.clone(),
            gender: self.gender.value.clone(),
            preferences: self.preferences.value.clone(),
        })
    }

    /// Records the outcome of the outstanding request.
    pub fn complete(&mut self, outcome: Result<Recommendation, RecommendationError>) {
        if !self.is_loading() {
            warn!("Dropping recommendation outcome: no request is outstanding");
            return;
        }

        self.phase = match outcome {
            Ok(rec) => {
                info!("Recommendation received: '{}'", rec.primary_outfit.title);
                FormPhase::Success(rec)
            }
            Err(e) => {
                warn!("Recommendation failed: {e}");
                FormPhase::Failure(e.banner_message())
            }
        };
    }

    /// Full submit: gate, call the recommender, record the outcome.
    pub async fn submit(&mut self, recommender: &dyn Recommender) -> &FormPhase {
        if let Some(request) = self.begin_submit() {
            let outcome = recommender
                .recommend(&request.occasion, &request.gender, &request.preferences)
                .await;
            self.complete(outcome);
        }
        &self.phase
    }

    /// Back to the initial empty form.
    #[allow(dead_code)]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Closes the error banner, keeping the entered values.
    #[allow(dead_code)]
    pub fn dismiss_error(&mut self) {
        if matches!(self.phase, FormPhase::Failure(_)) {
            self.phase = FormPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::stylist::recommender::{sample_recommendation, GENERIC_FAILURE_MESSAGE};
    use crate::stylist::validation::{GENDER_REQUIRED, OCCASION_REQUIRED};

    /// Records every call and answers with a canned outcome.
    struct StubRecommender {
        calls: Mutex<Vec<(String, String, String)>>,
        fail_with: Option<fn() -> RecommendationError>,
    }

    impl StubRecommender {
        fn ok() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(make: fn() -> RecommendationError) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_with: Some(make),
            }
        }

        /// Fails without a displayable message.
        fn rejecting() -> Self {
            Self::failing(|| RecommendationError::Message(String::new()))
        }

        fn calls(&self) -> Vec<(String, String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Recommender for StubRecommender {
        async fn recommend(
            &self,
            occasion: &str,
            gender: &str,
            preferences: &str,
        ) -> Result<Recommendation, RecommendationError> {
            self.calls.lock().unwrap().push((
                occasion.to_string(),
                gender.to_string(),
                preferences.to_string(),
            ));
            match self.fail_with {
                Some(make) => Err(make()),
                None => Ok(sample_recommendation()),
            }
        }

        fn backend(&self) -> &'static str {
            "stub"
        }
    }

    fn filled(occasion: &str, gender: &str, preferences: &str) -> FormController {
        let mut form = FormController::new();
        form.set_field(Field::Occasion, occasion);
        form.set_field(Field::Gender, gender);
        form.set_field(Field::Preferences, preferences);
        form
    }

    #[test]
    fn test_untouched_field_is_not_validated_on_edit() {
        let mut form = FormController::new();
        form.set_field(Field::Occasion, "Hi");
        assert_eq!(form.message(Field::Occasion), "");
        assert_eq!(form.visible_error(Field::Occasion), None);
    }

    #[test]
    fn test_touched_field_revalidates_on_edit() {
        let mut form = FormController::new();
        form.touch(Field::Occasion);
        assert_eq!(form.visible_error(Field::Occasion), Some(OCCASION_REQUIRED));

        form.set_field(Field::Occasion, "Hi");
        assert_eq!(
            form.visible_error(Field::Occasion),
            Some("At least 5 chars needed.")
        );

        form.set_field(Field::Occasion, "Weekend Brunch");
        assert_eq!(form.visible_error(Field::Occasion), None);
    }

    #[test]
    fn test_form_invalid_without_gender() {
        let form = filled("Gallery Opening", "", "");
        assert!(!form.is_form_valid());
        let form = filled("Gallery Opening", "Female", "");
        assert!(form.is_form_valid());
    }

    #[test]
    fn test_form_invalid_with_short_occasion() {
        assert!(!filled("  Hi  ", "Male", "").is_form_valid());
    }

    #[test]
    fn test_occasion_counter_uses_raw_length() {
        let form = filled(" Brunch ", "", "");
        assert_eq!(form.occasion_counter(), "8/300");
    }

    #[test]
    fn test_apply_suggestion_sets_occasion() {
        let mut form = FormController::new();
        form.apply_suggestion("Tech Job Interview");
        assert_eq!(form.value(Field::Occasion), "Tech Job Interview");
    }

    #[tokio::test]
    async fn test_valid_submit_calls_recommender_and_stores_result() {
        let stub = StubRecommender::ok();
        let mut form = filled("Gallery Opening", "Female", "");
        assert!(form.can_submit());

        form.submit(&stub).await;

        assert_eq!(
            stub.calls(),
            vec![(
                "Gallery Opening".to_string(),
                "Female".to_string(),
                String::new()
            )]
        );
        assert_eq!(form.result(), Some(&sample_recommendation()));
        assert!(!form.is_loading());
        assert_eq!(form.error(), None);
    }

    #[tokio::test]
    async fn test_short_occasion_blocks_submit_without_call() {
        let stub = StubRecommender::ok();
        let mut form = filled("Hi", "Female", "");

        form.submit(&stub).await;

        assert!(stub.calls().is_empty());
        assert_eq!(form.phase(), &FormPhase::Idle);
        assert_eq!(
            form.visible_error(Field::Occasion),
            Some("At least 5 chars needed.")
        );
    }

    #[tokio::test]
    async fn test_submit_marks_every_field_touched() {
        let stub = StubRecommender::ok();
        let mut form = FormController::new();

        form.submit(&stub).await;

        assert!(Field::ALL.iter().all(|f| form.is_touched(*f)));
        assert_eq!(form.visible_error(Field::Gender), Some(GENDER_REQUIRED));
        assert!(stub.calls().is_empty());
    }

    #[tokio::test]
    async fn test_submit_revalidates_untouched_overlong_preferences() {
        let stub = StubRecommender::ok();
        let mut form = filled("Gallery Opening", "Female", &"x".repeat(201));
        assert!(form.is_form_valid());

        form.submit(&stub).await;

        assert!(stub.calls().is_empty());
        assert_eq!(
            form.visible_error(Field::Preferences),
            Some("Limit to 200 characters.")
        );
    }

    #[tokio::test]
    async fn test_failure_without_message_shows_generic_banner() {
        let stub = StubRecommender::rejecting();
        let mut form = filled("Gallery Opening", "Female", "");

        form.submit(&stub).await;

        assert_eq!(form.error(), Some(GENERIC_FAILURE_MESSAGE));
        assert!(!form.is_loading());
        assert_eq!(form.result(), None);
    }

    #[tokio::test]
    async fn test_failure_with_message_shows_it() {
        let stub =
            StubRecommender::failing(|| RecommendationError::Message("quota exceeded".into()));
        let mut form = filled("Gallery Opening", "Female", "");

        form.submit(&stub).await;

        assert_eq!(form.error(), Some("quota exceeded"));
    }

    #[test]
    fn test_second_begin_submit_while_outstanding_is_ignored() {
        let mut form = filled("Gallery Opening", "Female", "");
        assert!(form.begin_submit().is_some());
        assert!(form.is_loading());
        assert!(!form.can_submit());
        assert!(form.begin_submit().is_none());
        assert!(form.is_loading());
    }

    #[test]
    fn test_complete_without_outstanding_request_is_dropped() {
        let mut form = filled("Gallery Opening", "Female", "");
        form.complete(Ok(sample_recommendation()));
        assert_eq!(form.phase(), &FormPhase::Idle);
    }

    #[tokio::test]
    async fn test_new_submit_clears_prior_error() {
        let mut form = filled("Gallery Opening", "Female", "");
        form.submit(&StubRecommender::rejecting()).await;
        assert!(form.error().is_some());

        assert!(form.begin_submit().is_some());
        assert_eq!(form.error(), None);
        assert_eq!(form.result(), None);
    }

    #[tokio::test]
    async fn test_reset_returns_to_empty_form() {
        let stub = StubRecommender::ok();
        let mut form = filled("Gallery Opening", "Female", "no heels");
        form.submit(&stub).await;
        assert!(form.result().is_some());

        form.reset();

        assert_eq!(form, FormController::new());
        assert!(Field::ALL.iter().all(|f| form.visible_error(*f).is_none()));
        assert!(Field::ALL.iter().all(|f| form.value(*f).is_empty()));
    }

    #[tokio::test]
    async fn test_dismiss_error_keeps_values() {
        let mut form = filled("Gallery Opening", "Female", "linen");
        form.submit(&StubRecommender::rejecting()).await;

        form.dismiss_error();

        assert_eq!(form.phase(), &FormPhase::Idle);
        assert_eq!(form.value(Field::Occasion), "Gallery Opening");
        assert_eq!(form.value(Field::Preferences), "linen");
    }
}
