//! Booking field rules
//!
//! Every field is checked independently, except that the time check needs a
//! parseable date to build the combined instant. All failures are collected
//! in one pass.

use super::{BookingField, FieldErrors};
use crate::models::{BookingForm, BookingRequest};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;
use validator::ValidateEmail;

/// Largest party the restaurant accepts
pub const MAX_GUESTS: u8 = 12;

/// Minimum lead time between "now" and the reservation
pub const MIN_LEAD_TIME_HOURS: i64 = 1;

/// Optional `0` or `+44`, optional single space, then 10 ASCII digits
static UK_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:0|\+44)? ?[0-9]{10}$").expect("UK phone pattern compiles")
});

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Validate the whole form against the local wall-clock `now`
pub fn validate_booking(
    form: &BookingForm,
    now: NaiveDateTime,
) -> Result<BookingRequest, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = check(&mut errors, BookingField::Name, name(form));
    let email = check(&mut errors, BookingField::Email, email(form));
    let phone = check(&mut errors, BookingField::Phone, phone(form));
    let date = check(&mut errors, BookingField::Date, date(form, now));
    let time = check(&mut errors, BookingField::Time, time(form, now));
    let guests = check(&mut errors, BookingField::Guests, guests(form));

    match (name, email, phone, date, time, guests) {
        (Some(name), Some(email), Some(phone), Some(date), Some(time), Some(guests))
            if errors.is_empty() =>
        {
            Ok(BookingRequest {
                name,
                email,
                phone,
                date,
                time,
                guests,
            })
        }
        _ => {
            tracing::debug!(failed = errors.len(), "Booking form rejected");
            Err(errors)
        }
    }
}

/// Validate one field; `None` means the field is fine
pub fn validate_field(
    field: BookingField,
    form: &BookingForm,
    now: NaiveDateTime,
) -> Option<String> {
    match field {
        BookingField::Name => name(form).err(),
        BookingField::Email => email(form).err(),
        BookingField::Phone => phone(form).err(),
        BookingField::Date => date(form, now).err(),
        BookingField::Time => time(form, now).err(),
        BookingField::Guests => guests(form).err(),
    }
}

type Rule<T> = Result<T, String>;

fn check<T>(errors: &mut FieldErrors, field: BookingField, rule: Rule<T>) -> Option<T> {
    match rule {
        Ok(v) => Some(v),
        Err(message) => {
            errors.add(field, message);
            None
        }
    }
}

fn required(field: BookingField, value: &str) -> Rule<String> {
    if value.trim().is_empty() {
        return Err(format!("{} is a required field", field.path()));
    }
    Ok(value.to_string())
}

fn name(form: &BookingForm) -> Rule<String> {
    required(BookingField::Name, &form.name)
}

fn email(form: &BookingForm) -> Rule<String> {
    let email = required(BookingField::Email, &form.email)?;
    if !email.trim().validate_email() {
        return Err("must be a valid email".into());
    }
    Ok(email)
}

fn phone(form: &BookingForm) -> Rule<String> {
    let phone = required(BookingField::Phone, &form.phone)?;
    if !UK_PHONE.is_match(phone.trim()) {
        return Err("must be a valid UK number".into());
    }
    Ok(phone)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
}

fn date(form: &BookingForm, now: NaiveDateTime) -> Rule<NaiveDate> {
    let date = parse_date(&form.date).ok_or_else(|| "must be a valid date".to_string())?;
    // compare against today with the time-of-day zeroed
    if date < now.date() {
        return Err("cannot be set for the past".into());
    }
    Ok(date)
}

fn time(form: &BookingForm, now: NaiveDateTime) -> Rule<NaiveTime> {
    let time = parse_time(&form.time).ok_or_else(|| "must be a valid time".to_string())?;
    if let Some(date) = parse_date(&form.date)
        && date.and_time(time) < now + Duration::hours(MIN_LEAD_TIME_HOURS)
    {
        return Err("must be scheduled for at least 1 hour in the future".into());
    }
    Ok(time)
}

fn guests(form: &BookingForm) -> Rule<u8> {
    let raw = form.guests.trim();
    if raw.is_empty() {
        return Err("guests is a required field".into());
    }
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let count: i64 = match raw.parse() {
        Ok(count) => count,
        // integer too long for i64
        Err(_) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            if raw.starts_with('-') {
                return Err("guests must be a positive number".into());
            }
            return Err(format!("invalid number of guests (max is {MAX_GUESTS})"));
        }
        Err(_) => return Err("guests must be a whole number".into()),
    };
    if count <= 0 {
        return Err("guests must be a positive number".into());
    }
    if count > i64::from(MAX_GUESTS) {
        return Err(format!("invalid number of guests (max is {MAX_GUESTS})"));
    }
    u8::try_from(count).map_err(|_| format!("invalid number of guests (max is {MAX_GUESTS})"))
}
