//! Booking form state
//!
//! Field edits, blur validation for email and phone, whole-form validation
//! on submit, and a single POST per valid submit.

use crate::{ClientError, RestaurantApi};
use chrono::NaiveDateTime;
use shared::{BookingField, BookingForm, FieldErrors, validate_booking, validate_field};

pub const SUBMIT_LABEL: &str = "Book";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const SUCCESS_NOTICE: &str = "Booking successful";
pub const REJECTED_MESSAGE: &str = "Booking failed";

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingStatus {
    #[default]
    Editing,
    /// A POST is outstanding; the submit control is disabled
    Submitting,
    Submitted,
}

/// Result of one submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Field errors were recorded, nothing was sent
    Invalid,
    /// A request is already outstanding, nothing was sent
    Busy,
    /// The request was sent and failed; see [`BookingFormController::form_error`]
    Failed,
    Submitted,
}

#[derive(Debug, Clone, Default)]
pub struct BookingFormController {
    form: BookingForm,
    errors: FieldErrors,
    form_error: Option<String>,
    status: BookingStatus,
}

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

impl BookingFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn value(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.form.name,
            BookingField::Email => &self.form.email,
            BookingField::Phone => &self.form.phone,
            BookingField::Date => &self.form.date,
            BookingField::Time => &self.form.time,
            BookingField::Guests => &self.form.guests,
        }
    }

    /// Record an edit; leaves the "submitted" display as soon as the user types again
    pub fn set_field(&mut self, field: BookingField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BookingField::Name => self.form.name = value,
            BookingField::Email => self.form.email = value,
            BookingField::Phone => self.form.phone = value,
            BookingField::Date => self.form.date = value,
            BookingField::Time => self.form.time = value,
            BookingField::Guests => self.form.guests = value,
        }
        if self.status == BookingStatus::Submitted {
            self.status = BookingStatus::Editing;
        }
    }

    /// Focus left `field`
    pub fn blur(&mut self, field: BookingField) {
        self.blur_at(field, local_now());
    }

    /// Only email and phone validate on blur; other fields wait for submit
    pub fn blur_at(&mut self, field: BookingField, now: NaiveDateTime) {
        if field.validates_on_blur() {
            let message = validate_field(field, &self.form, now);
            self.errors.set(field, message);
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn field_error(&self, field: BookingField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Top-level error from the last submit
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == BookingStatus::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn success_notice(&self) -> Option<&'static str> {
        (self.status == BookingStatus::Submitted).then_some(SUCCESS_NOTICE)
    }

    /// Validate and send the booking now
    pub async fn submit<A: RestaurantApi + ?Sized>(&mut self, api: &A) -> SubmitOutcome {
        self.submit_at(api, local_now()).await
    }

    /// Validate against `now` and send at most one POST
    pub async fn submit_at<A: RestaurantApi + ?Sized>(
        &mut self,
        api: &A,
        now: NaiveDateTime,
    ) -> SubmitOutcome {
        let body = match self.begin_submit(now) {
            Ok(body) => body,
            Err(outcome) => return outcome,
        };
        let result = api.create_booking(&body).await;
        self.finish_submit(result)
    }

    /// First half of a submit: validate and mark the form busy
    ///
    /// Returns the body to POST. Front ends that run the request on another
    /// task call this, send the body, then hand the result to
    /// [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self, now: NaiveDateTime) -> Result<BookingForm, SubmitOutcome> {
        if self.is_submitting() {
            return Err(SubmitOutcome::Busy);
        }

        match validate_booking(&self.form, now) {
            Err(errors) => {
                self.errors = errors;
                self.form_error = None;
                self.status = BookingStatus::Editing;
                Err(SubmitOutcome::Invalid)
            }
            Ok(request) => {
                tracing::debug!(guests = request.guests, date = %request.date, "Submitting booking");
                self.errors.clear();
                self.form_error = None;
                self.status = BookingStatus::Submitting;
                Ok(self.form.clone())
            }
        }
    }

    /// Second half of a submit: settle the outstanding request
    pub fn finish_submit(&mut self, result: Result<(), ClientError>) -> SubmitOutcome {
        match result {
            Ok(()) => {
                tracing::info!("Booking submitted");
                self.errors.clear();
                self.form_error = None;
                self.status = BookingStatus::Submitted;
                SubmitOutcome::Submitted
            }
            Err(e) => {
                tracing::warn!(error = %e, "Booking submission failed");
                self.form_error = Some(if e.is_rejection() {
                    REJECTED_MESSAGE.to_string()
                } else {
                    format!("Something went wrong: \"{e}\"")
                });
                self.status = BookingStatus::Editing;
                SubmitOutcome::Failed
            }
        }
    }
}
