//! API Module
//!
//! HTTP handlers and routing for the word service REST API.
//!
//! # Endpoints
//! - `GET /api/words` - List all words, or one word with `?id=`
//! - `POST /api/words` - Create a word
//! - `PUT /api/words/:id` - Update a word
//! - `DELETE /api/words/:id` - Delete a word
//! - `GET /api/words/redact` - Mask sensitive words in `?sentence=`
//! - `GET /stats` - Word cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
