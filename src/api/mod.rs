// API routes and handlers

pub mod access;
pub mod auth;
pub mod classes;
pub mod devices;
pub mod health;
pub mod members;
pub mod progress;
pub mod reservations;
pub mod routes;
pub mod routines;
pub mod trainers;
