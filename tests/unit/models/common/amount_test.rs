use crate::models::common::Amount;
use std::cmp::Ordering;

fn from_vec(values: Vec<i64>) -> Amount {
    Amount::new(values)
}

#[test]
fn can_sum_amounts() {
    assert_eq!(from_vec(vec![1, 0, 2]) + from_vec(vec![3, 1, 0]), from_vec(vec![4, 1, 2]));
    assert_eq!(from_vec(vec![1]) + from_vec(vec![0, 0, 2]), from_vec(vec![1, 0, 2]));
    assert_eq!(Amount::default() + from_vec(vec![1]), from_vec(vec![1]));

    assert_eq!(vec![from_vec(vec![1, 2]), from_vec(vec![3, 0])].into_iter().sum::<Amount>(), from_vec(vec![4, 2]));
}

#[test]
fn can_sub_amounts() {
    assert_eq!(from_vec(vec![3, 0, 2]) - from_vec(vec![1, 1, 4]), from_vec(vec![2, -1, -2]));
    assert_eq!(from_vec(vec![3, 0, 2]) - from_vec(vec![0, 0, 0]), from_vec(vec![3, 0, 2]));
    assert_eq!(from_vec(vec![1]) - from_vec(vec![0, 0, 2]), from_vec(vec![1, 0, -2]));
}

#[test]
fn can_compare_amounts() {
    assert_eq!(from_vec(vec![3, 0, 2]).partial_cmp(&from_vec(vec![1, 1, 4])), None);
    assert_eq!(from_vec(vec![3]).partial_cmp(&from_vec(vec![1, 1, 4])), None);

    assert_eq!(from_vec(vec![1, 0, 2]).partial_cmp(&from_vec(vec![3, 3, 3])), Some(Ordering::Less));
    assert_eq!(from_vec(vec![1, 1]).partial_cmp(&from_vec(vec![1, 2])), Some(Ordering::Less));
    assert_eq!(from_vec(vec![3, 3, 3]).partial_cmp(&from_vec(vec![1, 0, 2])), Some(Ordering::Greater));

    assert_eq!(from_vec(vec![0, 0, 2]).partial_cmp(&from_vec(vec![0, 0, 2])), Some(Ordering::Equal));
    assert_eq!(from_vec(vec![1, 0, 0]).partial_cmp(&from_vec(vec![1])), Some(Ordering::Equal));
    assert_eq!(from_vec(vec![0, 0]).partial_cmp(&Amount::default()), Some(Ordering::Equal));

    assert!(from_vec(vec![1, 1]) < from_vec(vec![2, 2]));
    assert!(!(from_vec(vec![1, 3]) < from_vec(vec![3, 1])));
    assert!(!(from_vec(vec![3, 1]) < from_vec(vec![1, 3])));
}

#[test]
fn can_check_capacity_fit() {
    assert!(from_vec(vec![10, 5]).can_fit(&from_vec(vec![5, 5])));
    assert!(from_vec(vec![10, 5]).can_fit(&from_vec(vec![10, 5])));

    assert!(!from_vec(vec![10, 5]).can_fit(&from_vec(vec![5, 6])));
    assert!(!from_vec(vec![1, 0]).can_fit(&from_vec(vec![0, 1])));
}

#[test]
fn can_compute_componentwise_max() {
    assert_eq!(from_vec(vec![3, 0, 2]).max(&from_vec(vec![1, 1, 4])), from_vec(vec![3, 1, 4]));
    assert_eq!(from_vec(vec![0, 1]).max(&from_vec(vec![1, 0])), from_vec(vec![1, 1]));
}
