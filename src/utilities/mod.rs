pub mod config;
pub mod controller;
pub mod cycle;
pub mod debug;
pub mod direction;
pub mod elevator_status;
pub mod error;
pub mod motion_state;
pub mod request;
pub mod trace;
