use crate::helpers::models::*;
use crate::models::common::TimeWindow;
use crate::models::solution::{RouteState, TwRoute};
use crate::models::Input;

fn create_input() -> Input {
    test_input(
        vec![
            test_job_with_tws(1, vec![TimeWindow::new(8, 10)]),
            test_job_with_tws(2, vec![TimeWindow::new(0, 3)]),
            test_job_with_tws(3, vec![TimeWindow::new(4, 6)]),
            test_job_with_tws(5, vec![TimeWindow::new(0, 1)]),
        ],
        vec![test_vehicle(vec![10])],
        line_matrix(6),
    )
}

#[test]
fn can_check_addition_against_time_windows() {
    let input = create_input();
    let mut route = TwRoute::new(&input, 0);

    assert!(route.is_valid_addition_for_tw(&input, 0, 0));
    // location 5 cannot be reached before its window closes
    assert!(!route.is_valid_addition_for_tw(&input, 3, 0));

    route.add(&input, 1, 0);
    route.update_amounts(&input);

    // after serving location 2, location 3 opens right on time
    assert!(route.is_valid_addition_for_tw(&input, 2, 1));
    // the late window at location 1 would push the assigned job out of its window
    assert!(!route.is_valid_addition_for_tw(&input, 0, 0));
}

#[test]
fn can_propagate_schedule_on_add() {
    let input = create_input();
    let mut route = TwRoute::new(&input, 0);

    route.add(&input, 1, 0);
    assert_eq!(route.earliest, vec![2]);
    assert_eq!(route.latest, vec![3]);

    route.add(&input, 2, 1);
    assert_eq!(route.earliest, vec![2, 4]);
    assert_eq!(route.latest, vec![3, 6]);

    route.add(&input, 0, 2);
    assert_eq!(route.earliest, vec![2, 4, 8]);
    assert_eq!(route.latest, vec![3, 6, 10]);
}

#[test]
fn can_pick_later_time_window_when_first_is_missed() {
    let input = test_input(
        vec![
            test_job_with_tws(3, vec![TimeWindow::new(0, 1), TimeWindow::new(10, 20)]),
            test_job_with_tws(1, vec![TimeWindow::new(0, 100)]),
        ],
        vec![test_vehicle(vec![10])],
        line_matrix(4),
    );
    let mut route = TwRoute::new(&input, 0);

    // arrival at 3 misses [0, 1] and falls back to [10, 20]
    assert!(route.is_valid_addition_for_tw(&input, 0, 0));

    route.add(&input, 0, 0);
    assert_eq!(route.earliest, vec![10]);
    assert_eq!(route.latest, vec![20]);

    assert_eq!(route.tw_ranks, vec![1]);

    // the predecessor pushes the second job past nothing: plenty of slack remains
    assert!(route.is_valid_addition_for_tw(&input, 1, 0));
    assert!(route.is_valid_addition_for_tw(&input, 1, 1));
}

#[test]
fn can_respect_vehicle_shift_end() {
    let mut vehicle = test_vehicle(vec![10]);
    vehicle.tw = TimeWindow::new(0, 10);

    let input = test_input(
        vec![test_job_with_tws(4, vec![TimeWindow::new(0, 100)]), test_job_with_tws(6, vec![TimeWindow::new(0, 100)])],
        vec![vehicle],
        line_matrix(7),
    );
    let route = TwRoute::new(&input, 0);

    // the round trip to 4 fits into the shift, the one to 6 does not
    assert!(route.is_valid_addition_for_tw(&input, 0, 0));
    assert!(!route.is_valid_addition_for_tw(&input, 1, 0));
}
