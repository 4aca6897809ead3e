//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation: API endpoints,
//! business logic, data access, and the pricing core. The backend uses Axum
//! as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration
//! - **Pricing Core** (`pricing/`) - Pure price, availability, and refund computation
//! - **Data Layer** (`data/`) - Database operations and rule-source adapters
//! - **Model Layer** (`model/`) - Domain models and parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. **Controller** validates payload shape, converts DTOs to params
//! 3. **Service** loads rules, bookings, and restrictions through the data layer
//! 4. **Pricing core** computes the quote, verdict, or refund from those inputs
//! 5. **Service** shapes the result into a DTO
//! 6. **Controller** returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod pricing;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
