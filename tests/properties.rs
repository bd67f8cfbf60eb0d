//! Property-based tests for the escape-time evaluator and the grid scheduler.

use mandelbrot_grid::{escape_time, Complex, EscapeGrid, GridScheduler, Schedule};
use proptest::prelude::*;

fn fill(width: usize, height: usize, max_iter: u32, threads: usize, schedule: Schedule) -> EscapeGrid {
    let scheduler = GridScheduler::new(Some(threads), schedule).expect("worker pool");
    let mut grid = EscapeGrid::new(width, height, max_iter);
    scheduler.fill(&mut grid);
    grid
}

proptest! {
    #[test]
    fn escape_time_within_bound_inside_radius_two(
        radius in 0.0f64..=2.0,
        angle in 0.0f64..std::f64::consts::TAU,
        max_iter in 1u32..2000,
    ) {
        let c = Complex::new(radius * angle.cos(), radius * angle.sin());
        let n = escape_time(c, max_iter);
        prop_assert!(n >= 1);
        prop_assert!(n <= max_iter);
    }

    #[test]
    fn escape_time_is_conjugate_symmetric(
        real in -2.5f64..1.0,
        imag in -1.5f64..1.5,
    ) {
        let c = Complex::new(real, imag);
        prop_assert_eq!(escape_time(c, 400), escape_time(c.conj(), 400));
    }

    #[test]
    fn points_outside_radius_two_escape_immediately(
        radius in 2.0001f64..100.0,
        angle in 0.0f64..std::f64::consts::TAU,
    ) {
        let c = Complex::new(radius * angle.cos(), radius * angle.sin());
        prop_assert_eq!(escape_time(c, 255), 2);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn schedules_and_thread_counts_agree(
        width in 1usize..48,
        height in 1usize..48,
        max_iter in 1u32..300,
        threads in 1usize..6,
    ) {
        let reference = fill(width, height, max_iter, 1, Schedule::Sequential);
        prop_assert!(reference.is_filled());
        prop_assert_eq!(&fill(width, height, max_iter, threads, Schedule::Dynamic), &reference);
        prop_assert_eq!(&fill(width, height, max_iter, threads, Schedule::Static), &reference);
    }

    #[test]
    fn even_heights_mirror_across_real_axis(
        width in 1usize..40,
        half_height in 1usize..24,
        threads in 1usize..4,
    ) {
        let grid = fill(width, half_height * 2, 200, threads, Schedule::Dynamic);
        prop_assert!(grid.is_mirror_symmetric());
    }
}

#[test]
fn reference_run_end_to_end() {
    let grid = fill(640, 480, 255, 4, Schedule::Dynamic);
    assert_eq!(grid.coordinate(240, 320), Complex::new(0.0, 0.0));
    assert_eq!(grid.get(240, 320), Some(255));
    assert_eq!(grid.coordinate(0, 0), Complex::new(-2.0, -2.0));
    assert_eq!(grid.get(0, 0), Some(2));
    assert_eq!(grid, fill(640, 480, 255, 1, Schedule::Sequential));
}
