use life::patterns::{self, random_soup};
use life::{LiveSet, step, step_coro};

#[tokio::test]
async fn empty_board_needs_no_workers() {
    let next = step_coro(&LiveSet::new(), 4).await.expect("no tasks to fail");
    assert!(next.is_empty());
}

#[tokio::test]
async fn zero_workers_still_steps() {
    let blinker = LiveSet::from([(0, 0), (1, 0), (2, 0)]);
    let next = step_coro(&blinker, 0).await.expect("task join");
    assert_eq!(next, LiveSet::from([(1, -1), (1, 0), (1, 1)]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn matches_sequential_step_for_any_worker_count() {
    for (seed, density) in [(0xA1, 0.10), (0xB2, 0.42), (0xC3, 0.75)] {
        let soup = random_soup(48, 48, density, seed);
        let expected = step(&soup);
        for workers in [1, 2, 3, 7, 50, 10_000] {
            let actual = step_coro(&soup, workers).await.expect("task join");
            assert_eq!(
                actual, expected,
                "mismatch for seed {seed:#x}, density {density}, {workers} workers"
            );
        }
    }
}

#[tokio::test]
async fn many_generations_agree_on_current_thread() {
    let gun = patterns::find("Gosper Glider Gun").map(|p| p.live_set()).unwrap_or_default();
    let mut seq = gun.clone();
    let mut coro = gun;
    for generation in 0..60 {
        seq = step(&seq);
        coro = step_coro(&coro, 5).await.expect("task join");
        assert_eq!(coro, seq, "diverged at generation {generation}");
    }
}
