use crate::models::common::TimeWindow;

#[test]
fn can_compute_duration() {
    assert_eq!(TimeWindow::new(10, 30).duration(), 20);
    assert_eq!(TimeWindow::new(5, 5).duration(), 0);
}

#[test]
fn can_create_unlimited_time_window() {
    let tw = TimeWindow::max();

    assert_eq!(tw.start, 0);
    assert!(tw.duration() > 0);
}
