pub mod car;
mod car_test;

pub use car::{Car, CarPayload};
