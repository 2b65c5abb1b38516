//! End-to-end: CSV text → loaded series → forecast → summary.

use pricecast::data::read_series;
use pricecast::math::StudentT;
use pricecast::simulation::Forecast;
use std::sync::Arc;

const CSV: &str = "\
Date,Open,High,Low,Close,Adj Close,Volume
2024-01-02,100.0,101.5,99.5,100.0,100.0,120000
2024-01-03,100.5,102.5,100.0,102.0,102.0,98000
2024-01-04,102.0,102.2,100.8,101.0,101.0,87000
2024-01-05,101.0,103.5,101.0,103.0,103.0,110000
2024-01-08,103.0,104.4,102.6,104.0,104.0,95000
";

#[test]
fn forecast_from_csv_is_reproducible() {
    let series = read_series(CSV.as_bytes(), "ACME").unwrap();
    let forecast = Forecast::new(5, 2_000).with_seed(7);

    let a = forecast.run(&series).unwrap();
    let b = forecast.run(&series).unwrap();
    assert_eq!(a, b);

    assert_eq!(a.starting_price, 104.0);
    assert_eq!(a.horizon, 5);
    assert_eq!(a.iterations, 2_000);
    assert!(a.worst_case <= a.average_case);
    assert!(a.average_case <= a.best_case);
}

#[test]
fn forecast_with_student_t_tails() {
    let series = read_series(CSV.as_bytes(), "ACME").unwrap();
    let summary = Forecast::new(5, 2_000)
        .with_distribution(Arc::new(StudentT::new(4.0).unwrap()))
        .with_seed(7)
        .run(&series)
        .unwrap();
    assert!(summary.worst_case > 0.0);
    assert!(summary.worst_case <= summary.best_case);
}

#[test]
fn report_block_is_fixed_format() {
    let series = read_series(CSV.as_bytes(), "ACME").unwrap();
    let summary = Forecast::new(5, 2_000).with_seed(7).run(&series).unwrap();
    let text = summary.to_string();

    assert!(text.contains("starting price"), "{text}");
    assert!(text.contains("104.00"), "{text}");
    assert!(text.contains("worst case"), "{text}");
    assert!(text.contains('%'), "{text}");
}
