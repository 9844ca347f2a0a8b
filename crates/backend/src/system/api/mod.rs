pub mod controllers;
pub mod handlers;
pub mod routes;
pub mod state;
