#![doc = include_str!("../README.md")]

pub use crate::error::{Error, Result};
pub use crate::leg::Leg;
pub use crate::route::Route;
pub use crate::solver::SpeedDistanceTime;
pub use crate::types::*;

mod error;
pub mod geodesy;
mod leg;
mod route;
mod solver;
mod types;
