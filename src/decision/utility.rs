use crate::Chips;
use crate::Utility;

/// Slider-to-coefficient scaling: risk_style 1.0 means r = 0.1.
const SLIDER_SCALE: f64 = 0.1;
/// |r| below this counts as risk-neutral.
const NEUTRAL_BAND: f64 = 1e-12;
/// Floor on the normalization scale.
const SCALE_FLOOR: f64 = 1e-9;
/// Cap on the normalized magnitude before exponentiation.
const MAGNITUDE_CAP: f64 = 1e12;

/// Map a chip delta to a risk-adjusted utility.
///
/// risk_style 0 is risk-neutral (the delta comes back unchanged). For
/// r = risk_style * 0.1 and k = |r|, gains take exponent 1+k and losses
/// 1/(1+k) when r > 0; the exponents swap when r < 0. The magnitude is
/// normalized by chip_scale, exponentiated, rescaled, and the original
/// sign restored. A zero delta is always zero utility.
pub fn utility(delta: Chips, risk_style: f64, chip_scale: Chips) -> Utility {
    if delta == 0.0 {
        return 0.0;
    }
    let r = risk_style * SLIDER_SCALE;
    if r.abs() < NEUTRAL_BAND {
        return delta;
    }
    let k = r.abs();
    let (gains, losses) = if r > 0.0 {
        (1.0 + k, 1.0 / (1.0 + k))
    } else {
        (1.0 / (1.0 + k), 1.0 + k)
    };
    let a = if delta > 0.0 { gains } else { losses };
    let c = chip_scale.max(SCALE_FLOOR);
    let s = (delta.abs() / c).min(MAGNITUDE_CAP);
    let u = c * ((s + 1.0).powf(a) - 1.0) / a;
    u.copysign(delta)
}
