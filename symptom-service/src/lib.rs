//! symptom-service: multilingual symptom checker backed by a generative model.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
