//! Test doubles shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Mutex;
use table_client::{
    BookingForm, ClientError, ClientResult, RestaurantApi, RestaurantDetail, RestaurantId,
    RestaurantSummary,
};
use shared::OpeningHours;

/// How the fake answers a call
pub enum Reply<T> {
    Ok(T),
    Status(StatusCode),
    Broken(&'static str),
}

impl<T: Clone> Reply<T> {
    fn get(&self) -> ClientResult<T> {
        match self {
            Reply::Ok(v) => Ok(v.clone()),
            Reply::Status(s) => Err(ClientError::Status(*s)),
            Reply::Broken(msg) => Err(ClientError::InvalidResponse(msg.to_string())),
        }
    }
}

/// In-memory restaurant API that records what it was asked
pub struct FakeApi {
    pub restaurants: Reply<Vec<RestaurantSummary>>,
    pub details: Reply<RestaurantDetail>,
    pub booking: Reply<()>,
    pub detail_calls: Mutex<Vec<RestaurantId>>,
    pub bookings: Mutex<Vec<BookingForm>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            restaurants: Reply::Ok(sample_restaurants()),
            details: Reply::Ok(sample_detail()),
            booking: Reply::Ok(()),
            detail_calls: Mutex::new(Vec::new()),
            bookings: Mutex::new(Vec::new()),
        }
    }

    pub fn booking_calls(&self) -> Vec<BookingForm> {
        self.bookings.lock().unwrap().clone()
    }
}

#[async_trait]
impl RestaurantApi for FakeApi {
    async fn list_restaurants(&self) -> ClientResult<Vec<RestaurantSummary>> {
        self.restaurants.get()
    }

    async fn restaurant_details(&self, id: RestaurantId) -> ClientResult<RestaurantDetail> {
        self.detail_calls.lock().unwrap().push(id);
        self.details.get()
    }

    async fn create_booking(&self, form: &BookingForm) -> ClientResult<()> {
        self.bookings.lock().unwrap().push(form.clone());
        self.booking.get()
    }
}

pub fn restaurant(id: u32, name: &str, rating: f64) -> RestaurantSummary {
    RestaurantSummary {
        id: RestaurantId::new(id).unwrap(),
        name: name.to_string(),
        short_description: format!("{name} description"),
        rating,
    }
}

pub fn sample_restaurants() -> Vec<RestaurantSummary> {
    vec![
        restaurant(1, "Velvet & Vine", 4.7),
        restaurant(2, "Gourmet Kitchen", 4.2),
        restaurant(3, "Sushi Place", 4.9),
    ]
}

pub fn sample_detail() -> RestaurantDetail {
    RestaurantDetail {
        address: "123 Fine St, London".into(),
        opening_hours: OpeningHours {
            weekday: "12:00 PM - 10:00 PM".into(),
            weekend: "11:00 AM - 11:00 PM".into(),
        },
        review_score: 4.7,
        contact_email: "info@gourmetkitchen.com".into(),
    }
}

/// Values valid against [`fixed_now`]
pub fn valid_form() -> BookingForm {
    BookingForm {
        name: "John Doe".into(),
        email: "j@gmail.com".into(),
        phone: "07123456789".into(),
        date: "2020-01-02".into(),
        time: "13:00".into(),
        guests: "2".into(),
    }
}

/// 2020-01-01 12:00 local
pub fn fixed_now() -> chrono::NaiveDateTime {
    chrono::NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}
