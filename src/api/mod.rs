// API routes and handlers, one module per dashboard view

pub mod charts;
pub mod dashboard;
pub mod error;
pub mod exercises;
pub mod goals;
pub mod health;
pub mod routes;
pub mod users;
pub mod weight;
pub mod workouts;
