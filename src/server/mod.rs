//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the dice API: HTTP endpoints,
//! business logic, store access, and infrastructure. The backend uses Axum as the
//! web framework and SeaORM over SQLite for persistence.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business operations and relationship population
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database connection)
//! - **Startup** (`startup`) - Logging, database connection and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Extract** (`extract`) - Validated JSON body extraction
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Extract** deserializes and validates the body, rejecting with 400 on failure
//! 3. **Controller** converts DTOs to params and calls a service
//! 4. **Service** runs the operation and resolves references through the resolver
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod extract;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
