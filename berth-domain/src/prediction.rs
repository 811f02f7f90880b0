/// Mock confirmation estimate, in percent, from how full the coach is.
///
/// Buckets are checked highest first: above 80% full gives 90, above 50%
/// gives 70, anything else 40.
pub fn confirmation_probability(booked: usize, total: usize) -> u8 {
    if total == 0 {
        return 40;
    }

    let fill_ratio = booked as f64 / total as f64;

    if fill_ratio > 0.8 {
        90
    } else if fill_ratio > 0.5 {
        70
    } else {
        40
    }
}
