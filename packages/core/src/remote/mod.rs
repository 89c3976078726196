//! Remote Task Service Layer
//!
//! The engine never talks to a network itself. It is handed a
//! [`TaskService`] capability and calls three abstract operations: list
//! projects, list currently-open task identifiers, create a task. Transport,
//! authentication and retry policy all live behind the trait.

pub mod client;

pub use client::{CreateTask, CreatedTask, RemoteProject, TaskService, TaskServiceError};
