use std::sync::Arc;
use std::time::Duration;

use list_modification_benchmarks::{
    head_add_remove, iterate, middle_add_remove, populate, tail_add_remove, Container, Grid,
    ListImpl, Operation, ParamSet, Runner, RunnerOptions, SeqList, Trial, DEFAULT_SIZES, SENTINEL,
};

const SIZES: [usize; 4] = [1, 2, 100, 10_000];

#[test]
fn populate_yields_size_elements() {
    for implementation in ListImpl::ALL {
        for size in [0, 1, 100, 10_000] {
            let list = populate(implementation, size);
            assert_eq!(list.len(), size, "{implementation}/{size}");
        }
    }
}

#[test]
fn add_remove_pairs_keep_length() {
    for implementation in ListImpl::ALL {
        for size in SIZES {
            let mut list = populate(implementation, size);
            assert_eq!(head_add_remove(&mut list).len(), size);
            assert_eq!(middle_add_remove(&mut list, size).len(), size);
            assert_eq!(tail_add_remove(&mut list, size).len(), size);
        }
    }
}

#[test]
fn repeated_pairs_stay_at_size() {
    for implementation in ListImpl::ALL {
        let size = 100;
        let mut list = populate(implementation, size);
        for _ in 0..50 {
            assert_eq!(head_add_remove(&mut list).len(), size);
            assert_eq!(middle_add_remove(&mut list, size).len(), size);
            assert_eq!(tail_add_remove(&mut list, size).len(), size);
        }
        assert!(list.to_vec().iter().all(|&v| v == SENTINEL));
    }
}

#[test]
fn iterate_visits_every_element_in_order() {
    for implementation in ListImpl::ALL {
        for size in SIZES {
            let mut list = implementation.create();
            for i in 0..size as i32 {
                list.push(i);
            }
            assert_eq!(iterate(&list), size, "{implementation}/{size}");
            assert_eq!(list.to_vec(), (0..size as i32).collect::<Vec<_>>());
        }
    }
}

#[test]
fn array_middle_add_remove_at_fifty() {
    let mut list = populate(ListImpl::Array, 100);
    assert!(list.to_vec().iter().all(|&v| v == i32::MIN));

    // Mark neighbours so a wrong index would show.
    list.remove(49);
    list.insert(49, 49);
    list.remove(50);
    list.insert(50, 50);

    middle_add_remove(&mut list, 100);
    let after = list.to_vec();
    assert_eq!(after.len(), 100);
    assert_eq!(after[49], 49);
    assert_eq!(after[50], 50);
}

#[test]
fn copy_on_write_tail_leaves_snapshot_untouched() {
    let mut list = populate(ListImpl::CopyOnWriteArray, 10_000);
    let before = match &list {
        Container::CopyOnWriteArray(cow) => cow.snapshot(),
        other => panic!("unexpected container {:?}", other.implementation()),
    };

    tail_add_remove(&mut list, 10_000);

    let after = match &list {
        Container::CopyOnWriteArray(cow) => cow.snapshot(),
        other => panic!("unexpected container {:?}", other.implementation()),
    };
    assert_eq!(before.len(), 10_000);
    assert_eq!(after.len(), 10_000);
    assert!(!Arc::ptr_eq(&before, &after));
    assert_ne!(before.as_ptr(), after.as_ptr());
}

#[test]
fn size_zero_grid_skips_add_remove() {
    for grid in [Grid::thread_unsafe(), Grid::thread_safe()] {
        let combos = grid.with_sizes(vec![0]).combinations();
        assert!(!combos.is_empty());
        assert!(combos
            .iter()
            .all(|c| matches!(c.operation, Operation::Populate | Operation::Iteration)));
    }
}

#[test]
fn trial_reuses_one_list_across_invocations() {
    let mut trial = Trial::setup(ParamSet::new(ListImpl::Linked, 100));
    for _ in 0..10 {
        for op in Operation::ALL {
            trial.invoke(op);
        }
    }
    assert_eq!(trial.list().len(), 100);
    assert_eq!(trial.params().size, 100);
}

#[test]
fn runner_reports_selected_grid() {
    let options = RunnerOptions::builder()
        .grid(Grid::thread_unsafe().with_sizes(vec![DEFAULT_SIZES[0]]))
        .include("AddRemove")
        .warmup_iterations(1)
        .measurement_iterations(1)
        .iteration_time(Duration::from_millis(2))
        .build()
        .unwrap();
    let report = Runner::new(options).run().unwrap();

    assert!(report.is_complete());
    assert_eq!(report.results.len(), 3 * 2);
    for result in &report.results {
        assert!(result.combination.operation.requires_elements());
        assert_eq!(result.score.samples, 1);
        assert!(result.score.mean > 0.0);
    }
}
