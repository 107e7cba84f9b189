//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: HTTP endpoints, business logic, data
//! access and the background job scheduler. The backend uses Axum as the web framework
//! and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Session** (`session`) - One database transaction per request or job run
//! - **State** (`state`) - Shared application state (session factory, configuration)
//! - **Startup** (`startup`) - Tracing, database connection and migrations
//! - **Router** (`router`) - Route aggregation and HTTP middleware
//! - **Scheduler** (`scheduler/`) - Background jobs outside the request path
//! - **Util** (`util/`) - Input validation rules and password hashing
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** extracts the body, query or path and validates it into params
//! 3. **Controller** opens a session and calls the service with it
//! 4. **Service** executes business logic through repositories
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Session** commits on success or rolls back on error
//! 7. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod session;
pub mod startup;
pub mod state;
pub mod util;
