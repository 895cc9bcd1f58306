//! Marquee countries reference data.
//!
//! **Feature flag:** `countries` (on by default)
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `GET /countries` | List countries |
//! | `GET /countries/{id}` | Get country by id |
//! | `POST /countries` | Create a country |
//! | `PUT /countries/{id}` | Update a country |
//! | `DELETE /countries/{id}` | Delete a country |
//! | `GET /countries/subdivisions` | List subdivisions |
//! | `GET /countries/subdivisions/{id}` | Get subdivision by id |
//! | `POST /countries/subdivisions` | Create a subdivision |
//! | `PUT /countries/subdivisions/{id}` | Update a subdivision |
//! | `DELETE /countries/subdivisions/{id}` | Delete a subdivision |
//!
//! List endpoints answer with a [`Results`](crate::common::Results) page; the client unwraps
//! it and returns the records.

pub mod client;
pub mod types;

pub use client::Client;
