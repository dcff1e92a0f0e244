// Exchange Integration Tests
// Postconditions, double swap, self-swap, clone/drop accounting

use exchange_core::{
    exchange_at_by_copy, exchange_at_by_move, exchange_by_copy, exchange_by_move, ExchangeCost,
    ExchangeError, ExchangeStrategy,
};
use std::cell::Cell;
use std::rc::Rc;

/// Value that counts how often it is cloned and dropped
#[derive(Debug)]
struct Tracked {
    payload: Vec<u32>,
    clones: Rc<Cell<usize>>,
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    fn new(payload: Vec<u32>, clones: &Rc<Cell<usize>>, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            payload,
            clones: Rc::clone(clones),
            drops: Rc::clone(drops),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.clones.set(self.clones.get() + 1);
        Self {
            payload: self.payload.clone(),
            clones: Rc::clone(&self.clones),
            drops: Rc::clone(&self.drops),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

fn counters() -> (Rc<Cell<usize>>, Rc<Cell<usize>>) {
    (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)))
}

#[test]
fn test_copy_exchanges_vectors() {
    let mut x = vec![1, 2, 3];
    let mut y = vec![4, 5];

    exchange_by_copy(&mut x, &mut y);

    assert_eq!(x, vec![4, 5]);
    assert_eq!(y, vec![1, 2, 3]);
}

#[test]
fn test_move_exchanges_vectors() {
    let mut x = vec![1, 2, 3];
    let mut y = vec![4, 5];

    exchange_by_move(&mut x, &mut y);

    assert_eq!(x, vec![4, 5]);
    assert_eq!(y, vec![1, 2, 3]);
}

#[test]
fn test_exchange_with_empty_vector() {
    let mut x: Vec<i32> = vec![];
    let mut y = vec![7];
    exchange_by_copy(&mut x, &mut y);
    assert_eq!(x, vec![7]);
    assert!(y.is_empty());

    let mut x: Vec<i32> = vec![];
    let mut y = vec![7];
    exchange_by_move(&mut x, &mut y);
    assert_eq!(x, vec![7]);
    assert!(y.is_empty());
}

#[test]
fn test_new_value_differs_unless_inputs_equal() {
    let pairs = [(1, 2), (5, 5), (-3, 0), (i64::MIN, i64::MAX)];

    for (old_x, old_y) in pairs {
        let (mut x, mut y) = (old_x, old_y);
        exchange_by_copy(&mut x, &mut y);
        assert_eq!((x, y), (old_y, old_x));
        assert_eq!(x != old_x, old_x != old_y);

        let (mut x, mut y) = (old_x, old_y);
        exchange_by_move(&mut x, &mut y);
        assert_eq!((x, y), (old_y, old_x));
        assert_eq!(x != old_x, old_x != old_y);
    }
}

#[test]
fn test_double_swap_restores_original() {
    let original = (String::from("alpha"), String::from("beta"));

    let (mut x, mut y) = original.clone();
    exchange_by_copy(&mut x, &mut y);
    exchange_by_copy(&mut x, &mut y);
    assert_eq!((x, y), original);

    let (mut x, mut y) = original.clone();
    exchange_by_move(&mut x, &mut y);
    exchange_by_move(&mut x, &mut y);
    assert_eq!((x, y), original);
}

#[test]
fn test_mixed_strategies_compose() {
    let mut x = vec!["a".to_string()];
    let mut y = vec!["b".to_string(), "c".to_string()];

    exchange_by_copy(&mut x, &mut y);
    exchange_by_move(&mut x, &mut y);

    assert_eq!(x, vec!["a".to_string()]);
    assert_eq!(y, vec!["b".to_string(), "c".to_string()]);
}

#[test]
fn test_self_swap_leaves_value_unchanged() {
    let mut values = vec![vec![1, 2], vec![3]];

    exchange_at_by_copy(&mut values, 0, 0).unwrap();
    assert_eq!(values, vec![vec![1, 2], vec![3]]);

    exchange_at_by_move(&mut values, 1, 1).unwrap();
    assert_eq!(values, vec![vec![1, 2], vec![3]]);
}

#[test]
fn test_self_swap_does_no_work() {
    let (clones, drops) = counters();
    let mut values = vec![Tracked::new(vec![1], &clones, &drops)];

    exchange_at_by_copy(&mut values, 0, 0).unwrap();
    exchange_at_by_move(&mut values, 0, 0).unwrap();

    assert_eq!(clones.get(), 0);
    assert_eq!(drops.get(), 0);
    assert_eq!(values[0].payload, vec![1]);
}

#[test]
fn test_indexed_exchange_matches_direct_exchange() {
    let mut values = vec![vec![1, 2, 3], vec![], vec![4, 5]];

    exchange_at_by_copy(&mut values, 0, 2).unwrap();
    assert_eq!(values, vec![vec![4, 5], vec![], vec![1, 2, 3]]);

    exchange_at_by_move(&mut values, 2, 1).unwrap();
    assert_eq!(values, vec![vec![4, 5], vec![1, 2, 3], vec![]]);
}

#[test]
fn test_indexed_exchange_out_of_bounds() {
    let mut values = vec![1, 2, 3];

    let err = exchange_at_by_copy(&mut values, 0, 3).unwrap_err();
    assert_eq!(err, ExchangeError::IndexOutOfBounds { index: 3, len: 3 });

    let err = exchange_at_by_move(&mut values, 7, 1).unwrap_err();
    assert_eq!(err, ExchangeError::IndexOutOfBounds { index: 7, len: 3 });

    // Rejected exchanges leave the slice as it was
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_copy_duplicates_three_times() {
    let (clones, drops) = counters();
    let mut x = Tracked::new(vec![1, 2, 3], &clones, &drops);
    let mut y = Tracked::new(vec![4, 5], &clones, &drops);

    exchange_by_copy(&mut x, &mut y);

    assert_eq!(clones.get(), 3);
    assert_eq!(x.payload, vec![4, 5]);
    assert_eq!(y.payload, vec![1, 2, 3]);
}

#[test]
fn test_move_neither_clones_nor_drops() {
    let (clones, drops) = counters();
    let mut x = Tracked::new(vec![1, 2, 3], &clones, &drops);
    let mut y = Tracked::new(vec![4, 5], &clones, &drops);

    exchange_by_move(&mut x, &mut y);

    assert_eq!(clones.get(), 0);
    assert_eq!(drops.get(), 0);
    assert_eq!(x.payload, vec![4, 5]);
    assert_eq!(y.payload, vec![1, 2, 3]);

    // Each final binding owns exactly one live value: dropping both drops exactly two
    drop(x);
    drop(y);
    assert_eq!(drops.get(), 2);
}

#[test]
fn test_move_transfers_buffers_without_reallocating() {
    let mut x = Vec::with_capacity(64);
    x.extend([1u8, 2, 3]);
    let mut y = vec![9u8];
    let (x_ptr, y_ptr) = (x.as_ptr(), y.as_ptr());

    exchange_by_move(&mut x, &mut y);

    assert_eq!(x.as_ptr(), y_ptr);
    assert_eq!(y.as_ptr(), x_ptr);
    assert!(y.capacity() >= 64);
}

#[test]
fn test_copy_cost_matches_observed_clones() {
    let (clones, drops) = counters();
    let mut x = Tracked::new(vec![1, 2, 3], &clones, &drops);
    let mut y = Tracked::new(vec![4, 5], &clones, &drops);

    exchange_by_copy(&mut x, &mut y);

    let cost = ExchangeCost::estimate(ExchangeStrategy::Duplicating, 3, 2);
    assert_eq!(cost.duplications as usize, clones.get());
    assert_eq!(cost.elements_duplicated, 3 + 2 + 3);
}
