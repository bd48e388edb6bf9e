pub fn mean(xs: impl Iterator<Item = f64>) -> f64 {
    let mut count = 0;
    let mut total = 0.0;
    for x in xs {
        count += 1;
        total += x;
    }
    assert_ne!(count, 0);
    total / count as f64
}

pub fn sum_of_squares(xs: impl Iterator<Item = f64>, center: f64) -> f64 {
    xs.map(|x| (x - center).powi(2)).sum()
}
