use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use transit_sssp::data_structures::{BinaryMinHeap, FibonacciHeap, PriorityQueue};
use transit_sssp::Error;

#[test]
fn test_binary_heap_pops_in_order() {
    let mut heap = BinaryMinHeap::new();
    for (priority, value) in [(5.0, 'e'), (1.0, 'a'), (4.0, 'd'), (2.0, 'b'), (3.0, 'c')] {
        heap.push(priority, value);
    }
    assert_eq!(heap.len(), 5);
    assert_eq!(heap.peek(), Some((1.0, &'a')));

    let popped: Vec<char> = std::iter::from_fn(|| heap.pop().ok()).map(|(_, v)| v).collect();
    assert_eq!(popped, vec!['a', 'b', 'c', 'd', 'e']);
    assert!(heap.is_empty());
}

#[test]
fn test_binary_heap_pop_empty_fails() {
    let mut heap: BinaryMinHeap<&str, f64> = BinaryMinHeap::new();
    assert!(matches!(heap.pop(), Err(Error::EmptyQueue)));

    heap.push(1.0, "x");
    heap.clear();
    assert!(matches!(heap.pop(), Err(Error::EmptyQueue)));
}

#[test]
fn test_binary_heap_keeps_duplicates() {
    let mut heap = BinaryMinHeap::new();
    heap.push_or_decrease(10.0, 7usize).unwrap();
    heap.push_or_decrease(3.0, 7usize).unwrap();

    // The superseded entry stays until it is popped
    assert_eq!(PriorityQueue::len(&heap), 2);
    assert_eq!(heap.extract_min().unwrap(), (3.0, 7));
    assert_eq!(heap.extract_min().unwrap(), (10.0, 7));
}

#[test]
fn test_fibonacci_extract_is_non_decreasing() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut heap = FibonacciHeap::new();
    for value in 0..500u32 {
        heap.insert(rng.gen_range(-1000.0..1000.0), value).unwrap();
    }
    assert_eq!(heap.len(), 500);

    let mut last = f64::NEG_INFINITY;
    for _ in 0..500 {
        let (key, value) = heap.extract_min().unwrap();
        assert!(key >= last, "extracted {} after {}", key, last);
        assert!(!heap.contains(&value));
        last = key;
    }
    assert!(heap.is_empty());
    assert!(matches!(heap.extract_min(), Err(Error::EmptyQueue)));
}

#[test]
fn test_fibonacci_decrease_key_moves_min() {
    let mut heap = FibonacciHeap::new();
    for (key, value) in [(10.0, "a"), (20.0, "b"), (30.0, "c"), (40.0, "d")] {
        heap.insert(key, value).unwrap();
    }
    // Extracting consolidates the rest into a tree so later decreases cut
    assert_eq!(heap.extract_min().unwrap(), (10.0, "a"));

    assert!(heap.decrease_key(&"d", 5.0));
    assert_eq!(heap.peek_min(), Some((5.0, &"d")));
    assert_eq!(heap.key_of(&"d"), Some(5.0));

    assert_eq!(heap.extract_min().unwrap(), (5.0, "d"));
    assert_eq!(heap.extract_min().unwrap(), (20.0, "b"));
    assert_eq!(heap.extract_min().unwrap(), (30.0, "c"));
}

#[test]
fn test_fibonacci_decrease_key_rejects_increase_and_unknown() {
    let mut heap = FibonacciHeap::new();
    heap.insert(1.0, 1u32).unwrap();
    heap.insert(2.0, 2u32).unwrap();
    heap.insert(3.0, 3u32).unwrap();
    heap.extract_min().unwrap();

    assert!(!heap.decrease_key(&3, 30.0));
    assert!(!heap.decrease_key(&99, 0.0));
    assert_eq!(heap.key_of(&3), Some(3.0));
    assert_eq!(heap.peek_min(), Some((2.0, &2)));

    // An equal key is accepted but changes nothing
    assert!(heap.decrease_key(&3, 3.0));
    assert_eq!(heap.peek_min(), Some((2.0, &2)));

    assert_eq!(heap.extract_min().unwrap(), (2.0, 2));
    assert_eq!(heap.extract_min().unwrap(), (3.0, 3));
}

#[test]
fn test_fibonacci_duplicate_insert_is_an_error() {
    let mut heap = FibonacciHeap::new();
    heap.insert(4.0, "stop").unwrap();
    assert!(matches!(heap.insert(1.0, "stop"), Err(Error::DuplicateEntry(_))));
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.key_of(&"stop"), Some(4.0));

    // Insert-or-update lowers the key instead
    assert!(heap.push_or_decrease(1.0, "stop").unwrap());
    assert!(!heap.push_or_decrease(2.0, "stop").unwrap());
    assert_eq!(heap.key_of(&"stop"), Some(1.0));

    // Once extracted, the value may be queued again
    heap.extract_min().unwrap();
    heap.insert(8.0, "stop").unwrap();
    assert_eq!(heap.len(), 1);
}

#[test]
fn test_queues_agree_on_random_workload() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut binary = BinaryMinHeap::new();
    let mut fibonacci = FibonacciHeap::new();
    let mut best = vec![f64::INFINITY; 200];

    // Mirrors how Dijkstra drives both queues: improvements only
    for _ in 0..3000 {
        let value = rng.gen_range(0..200usize);
        let key = rng.gen_range(0.0..1000.0);
        if key < best[value] {
            best[value] = key;
            binary.push_or_decrease(key, value).unwrap();
            fibonacci.push_or_decrease(key, value).unwrap();
        }
    }

    let mut from_fibonacci = Vec::new();
    while let Ok(entry) = fibonacci.extract_min() {
        from_fibonacci.push(entry);
    }

    let mut from_binary = Vec::new();
    while let Ok((key, value)) = binary.pop() {
        // Lazy deletion: drop superseded entries
        if key > best[value] {
            continue;
        }
        from_binary.push((key, value));
    }

    assert_eq!(from_binary.len(), from_fibonacci.len());
    let keys = |entries: &[(f64, usize)]| entries.iter().map(|(k, _)| *k).collect::<Vec<_>>();
    assert_eq!(keys(&from_binary), keys(&from_fibonacci));
}
