use crate::layout::CoolingSchedule;

#[test]
fn test_linear_schedule_anneals_to_zero() {
    let schedule = CoolingSchedule::Linear { start: 1.0, steps: 100 };
    let temps: Vec<f64> = schedule.temperatures().collect();
    assert_eq!(temps.len(), 100);
    assert_eq!(temps[0], 1.0);
    assert_eq!(temps[99], 0.0);
    assert!(temps.iter().all(|&t| t >= 0.0));
    assert!(temps.windows(2).all(|w| w[1] < w[0]), "temperatures must strictly decrease");
}

#[test]
fn test_linear_schedule_edge_cases() {
    assert_eq!(CoolingSchedule::Linear { start: 1.0, steps: 0 }.temperatures().count(), 0);
    let single: Vec<f64> = CoolingSchedule::Linear { start: 0.5, steps: 1 }.temperatures().collect();
    assert_eq!(single, vec![0.5]);
    assert_eq!(CoolingSchedule::Linear { start: 1.0, steps: 3 }.temperature(10), 0.0);
}

#[test]
fn test_geometric_schedule_stops_below_threshold() {
    let schedule = CoolingSchedule::Geometric { start: 1.0, factor: 0.99, stop: 0.01 };
    let temps: Vec<f64> = schedule.temperatures().collect();
    assert_eq!(temps.len(), 459);
    assert!(temps.iter().all(|&t| t >= 0.01));
    assert!(temps.windows(2).all(|w| w[1] < w[0]));
    assert!(temps[458] * 0.99 < 0.01);
    assert_eq!(schedule.temperature(2), 1.0 * 0.99 * 0.99);
}

#[test]
fn test_geometric_schedule_rejects_non_cooling_factor() {
    let schedule = CoolingSchedule::Geometric { start: 1.0, factor: 1.0, stop: 0.01 };
    assert_eq!(schedule.temperatures().count(), 0);
}

#[test]
fn test_geometric_schedule_with_zero_stop_terminates() {
    let schedule = CoolingSchedule::Geometric { start: 1.0, factor: 0.5, stop: 0.0 };
    let count = schedule.temperatures().count();
    // Halving reaches the subnormal floor and then zero.
    assert!(count > 1000 && count < 1100);
}

#[test]
fn test_peek_and_current_track_the_schedule() {
    let mut temps = CoolingSchedule::Geometric { start: 1.0, factor: 0.5, stop: 0.2 }.temperatures();
    assert_eq!(temps.peek(), Some(1.0));
    assert_eq!(temps.current(), 1.0);
    assert_eq!(temps.next(), Some(1.0));
    assert_eq!(temps.current(), 0.5);
    assert_eq!(temps.nth(1), Some(0.25));
    assert_eq!(temps.peek(), None);
    assert_eq!(temps.current(), 0.125);

    let mut linear = CoolingSchedule::Linear { start: 1.0, steps: 3 }.temperatures();
    assert_eq!(linear.peek(), Some(1.0));
    assert_eq!(linear.by_ref().count(), 3);
    assert_eq!(linear.current(), 0.0);
}
