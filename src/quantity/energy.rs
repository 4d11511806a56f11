use std::ops::Div;

use crate::quantity::power::Megawatts;

quantity!(MegawattHours, via: f64, suffix: " MWh");

/// Each row is an hourly reading, so its power is also the energy of that hour.
impl From<Megawatts> for MegawattHours {
    fn from(power: Megawatts) -> Self {
        Self(power.0)
    }
}

impl Div for MegawattHours {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}
