#[macro_use]
mod macros;

pub mod energy;
pub mod percent;
pub mod power;

pub use self::{energy::MegawattHours, percent::Percent, power::Megawatts};
