//! Walkthrough of the basic set operations

use intset::{IntSet, SharedIntSet};

fn main() {
    let mut s = IntSet::new();
    s.add(1);
    s.add(9);
    s.add(144);
    println!("s = {s} (len {})", s.len());

    let mut a = IntSet::new();
    let mut b = IntSet::new();
    a.add_all([1, 2, 3]);
    b.add_all([2, 3, 4]);
    println!("a = {a}, b = {b}");
    println!("a & b = {:?}", a.intersect_with(&b));
    println!("a - b = {:?}", a.difference_with(&b));
    println!("a ^ b = {:?}", a.symmetric_difference(&b));

    let copy = a.clone();
    a.union_with(&b);
    println!("a | b = {a}, copy still {copy}");

    a.remove(1000);
    a.clear();
    println!("cleared: {a}, still {} words allocated", a.word_count());

    if let Err(err) = a.try_add(-5) {
        println!("try_add(-5): {err}");
    }

    let shared = SharedIntSet::from_set(copy);
    std::thread::scope(|scope| {
        let handle = shared.clone();
        scope.spawn(move || handle.add(64));
    });
    println!("shared after worker: {}", shared.snapshot());
}
