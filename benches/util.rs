use std::env;
use std::str::FromStr;

use once_cell::sync::OnceCell;

pub fn pin_thread_to_core() {
    use std::cell::Cell;
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    // Set affinity only once per thread.
    AFFINITY_ALREADY_SET.with(|affinity_already_set| {
        if !affinity_already_set.get() {
            if let Some(core_id_2) = core_affinity::get_core_ids()
                .as_ref()
                .and_then(|ids| ids.get(pin_core_id))
            {
                core_affinity::set_for_current(*core_id_2);
            }

            affinity_already_set.set(true);
        }
    });
}

/// Largest input bubble and insertion sort are benchmarked with. Beyond that a single run takes
/// longer than the whole rest of the suite.
pub fn quadratic_max_len() -> usize {
    static QUADRATIC_MAX_LEN: OnceCell<usize> = OnceCell::new();

    *QUADRATIC_MAX_LEN.get_or_init(|| {
        env::var("BENCH_QUADRATIC_MAX_LEN")
            .map(|val| usize::from_str(&val).unwrap())
            .unwrap_or(2_048)
    })
}
