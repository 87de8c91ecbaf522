//! A few utilities to measure how long executing algorithms takes.

use std::sync::atomic::{compiler_fence, Ordering::SeqCst};
use std::time::*;

/// Measure how long it takes to execute the given lambda,
/// print the time and report it as `running_time_ms`.
pub fn report_time<Out, F: FnOnce() -> Out>(name: &str, f: F) -> Out {
    report_time_with_key(name, "running_time_ms", f)
}

/// Measure how long it takes to execute the given lambda,
/// print the time, report it under the given key and return the result of the lambda.
pub fn report_time_with_key<Out, F: FnOnce() -> Out>(name: &str, key: &'static str, f: F) -> Out {
    eprintln!("starting {}", name);
    let (res, t_passed) = measure(f);
    let t_passed = to_ms(t_passed);
    eprintln!("{} done - took: {}ms", name, t_passed);
    report!(key, t_passed);
    res
}

/// Measure how long it takes to execute the given lambda
/// and return a tuple of the result of the lambda and a duration object.
pub fn measure<Out, F: FnOnce() -> Out>(f: F) -> (Out, Duration) {
    compiler_fence(SeqCst);
    let start = Instant::now();
    let res = f();
    let t_passed = start.elapsed();
    compiler_fence(SeqCst);
    (res, t_passed)
}

/// Fractional milliseconds
pub fn to_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::collect_report;

    #[test]
    fn measure_returns_result() {
        let (res, duration) = measure(|| 6 * 7);
        assert_eq!(res, 42);
        assert!(duration < Duration::from_secs(60));
    }

    #[test]
    fn report_time_reports_under_key() {
        let ((), report) = collect_report(|| report_time_with_key("sleeping", "sleep_ms", || std::thread::sleep(Duration::from_millis(2))));
        assert!(report["sleep_ms"].as_f64().unwrap() >= 2.0);
    }

    #[test]
    fn report_time_defaults_to_running_time() {
        let (res, report) = collect_report(|| report_time("adding", || 6 * 7));
        assert_eq!(res, 42);
        assert!(report["running_time_ms"].as_f64().unwrap() >= 0.0);
    }
}
