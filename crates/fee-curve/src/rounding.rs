/// Number of decimal places every quoted fee is rounded to.
pub const FEE_DECIMALS: u32 = 4;

/// Rounds `value` to `decimals` places, half away from zero.
pub fn round_fee(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
