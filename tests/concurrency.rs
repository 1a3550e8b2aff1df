use stack_objectpool::{GiveError, Pool, PoolConfiguration};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

const THREADS: usize = 8;
const ROUNDS: usize = 2_000;

#[test]
fn test_no_object_is_lent_twice() {
    let objects = 4;
    let pool: Pool<usize> = Pool::new(objects);
    let in_use: Vec<AtomicBool> = (0..objects).map(|_| AtomicBool::new(false)).collect();
    for id in 0..objects {
        pool.give(id).unwrap();
    }

    let successes = AtomicUsize::new(0);
    crossbeam::thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|_| {
                for _ in 0..ROUNDS {
                    let Ok(id) = pool.take() else {
                        continue;
                    };
                    assert!(!in_use[id].swap(true, Ordering::SeqCst), "object {} lent twice", id);
                    std::hint::spin_loop();
                    in_use[id].store(false, Ordering::SeqCst);
                    pool.give(id).unwrap();
                    successes.fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    })
    .unwrap();

    assert_eq!(pool.size(), objects);
    let metrics = pool.metrics();
    assert_eq!(metrics.total_taken, successes.load(Ordering::Relaxed));
    assert_eq!(metrics.total_returned, objects + metrics.total_taken);
}

#[test]
fn test_final_size_is_net_of_gives_and_takes() {
    let pool: Pool<u64> = Pool::new(16);
    let gives = AtomicUsize::new(0);
    let takes = AtomicUsize::new(0);

    crossbeam::thread::scope(|s| {
        for t in 0..THREADS {
            let pool = &pool;
            let gives = &gives;
            let takes = &takes;
            s.spawn(move |_| {
                for i in 0..ROUNDS {
                    // Givers outnumber takers so the pool drifts upward.
                    if (t + i) % 3 == 0 {
                        if pool.take().is_ok() {
                            takes.fetch_add(1, Ordering::Relaxed);
                        }
                    } else {
                        pool.give(i as u64).unwrap();
                        gives.fetch_add(1, Ordering::Relaxed);
                    }
                }
            });
        }
    })
    .unwrap();

    assert_eq!(
        pool.size(),
        gives.load(Ordering::Relaxed) - takes.load(Ordering::Relaxed)
    );
}

#[test]
fn test_enforced_capacity_under_contention() {
    let capacity = 5;
    let pool: Pool<usize> = Pool::with_config(
        PoolConfiguration::new()
            .with_capacity(capacity)
            .enforce_capacity(),
    )
    .unwrap();
    let rejected = AtomicUsize::new(0);

    crossbeam::thread::scope(|s| {
        for t in 0..THREADS {
            let pool = &pool;
            let rejected = &rejected;
            s.spawn(move |_| {
                for i in 0..100 {
                    let value = t * 100 + i;
                    match pool.give(value) {
                        Ok(()) => {}
                        Err(GiveError::PoolFull { item, .. }) => {
                            assert_eq!(item, value);
                            rejected.fetch_add(1, Ordering::Relaxed);
                        }
                        Err(GiveError::InvalidArgument) => unreachable!(),
                    }
                    assert!(pool.size() <= capacity);
                }
            });
        }
    })
    .unwrap();

    assert_eq!(pool.size(), capacity);
    assert_eq!(rejected.load(Ordering::Relaxed), THREADS * 100 - capacity);
}

struct Tracked {
    released: Arc<AtomicUsize>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_teardown_after_threads_leaves_lent_objects_alone() {
    let released = Arc::new(AtomicUsize::new(0));
    let pool: Pool<Tracked> = Pool::new(32);
    for _ in 0..32 {
        pool.give(Tracked {
            released: Arc::clone(&released),
        })
        .unwrap();
    }

    let lent: Vec<Tracked> = crossbeam::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|_| (0..3).filter_map(|_| pool.try_take()).collect::<Vec<_>>()))
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    })
    .unwrap();

    assert_eq!(lent.len(), 12);
    drop(pool);
    assert_eq!(released.load(Ordering::SeqCst), 20);

    drop(lent);
    assert_eq!(released.load(Ordering::SeqCst), 32);
}

#[test]
fn test_guarded_objects_across_threads() {
    let pool: Pool<Vec<u8>> = Pool::new(THREADS);
    for _ in 0..THREADS {
        pool.give(Vec::new()).unwrap();
    }

    crossbeam::thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|_| {
                for _ in 0..ROUNDS {
                    if let Ok(mut buf) = pool.take_guarded() {
                        buf.clear();
                        buf.push(1);
                    }
                }
            });
        }
    })
    .unwrap();

    assert_eq!(pool.size(), THREADS);
}
