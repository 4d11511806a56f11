use crate::quantity::energy::MegawattHours;

quantity!(Percent, via: f64, suffix: "%", precision: 2);

impl Percent {
    /// Share of `part` in `whole`, or [`None`] when the whole is not positive.
    #[must_use]
    pub fn of(part: MegawattHours, whole: MegawattHours) -> Option<Self> {
        (whole > MegawattHours::ZERO).then(|| Self(part / whole * 100.0))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_of() {
        let percent = Percent::of(MegawattHours(50.0), MegawattHours(300.0)).unwrap();
        assert_abs_diff_eq!(percent.0, 16.666_666, epsilon = 1e-6);
        assert_eq!(percent.to_string(), "16.67%");
    }

    #[test]
    fn test_of_zero_whole() {
        assert!(Percent::of(MegawattHours::ZERO, MegawattHours::ZERO).is_none());
    }

    #[test]
    fn test_zero_part_is_not_none() {
        assert_eq!(Percent::of(MegawattHours::ZERO, MegawattHours(10.0)), Some(Percent(0.0)));
    }
}
