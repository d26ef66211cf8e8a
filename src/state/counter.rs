/// Value an animated counter shows `elapsed_ms` into a `duration_ms` run.
pub fn count_up(target: u32, elapsed_ms: u32, duration_ms: u32) -> u32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let progress = f64::from(elapsed_ms) / f64::from(duration_ms);
    (progress * f64::from(target)).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_linearly_and_stops_at_target() {
        assert_eq!(count_up(200, 0, 2000), 0);
        assert_eq!(count_up(200, 1000, 2000), 100);
        assert_eq!(count_up(98, 1999, 2000), 97);
        assert_eq!(count_up(98, 2000, 2000), 98);
        assert_eq!(count_up(98, 9000, 2000), 98);
        assert_eq!(count_up(15, 10, 0), 15);
    }
}
