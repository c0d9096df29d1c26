mod client;

pub use client::{ChatServiceClient, ServiceStatus};
