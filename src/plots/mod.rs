//! Marquee plots (saved charts).
//!
//! **Feature flag:** `plots` (on by default)
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `GET /plots` | List plots |
//! | `GET /plots/{id}` | Get plot by id |
//! | `POST /plots` | Create a plot |
//! | `PUT /plots/{id}` | Update a plot |
//! | `DELETE /plots/{id}` | Delete a plot |

pub mod client;
pub mod types;

pub use client::Client;
