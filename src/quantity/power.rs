quantity!(Megawatts, via: f64, suffix: " MW");
