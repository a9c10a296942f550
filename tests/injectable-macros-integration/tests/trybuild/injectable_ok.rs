use injectable_macros::Injectable;
use registry_common::Injectable as _; // trait brought into scope to call generated methods
use std::sync::Arc;

#[derive(Debug)]
struct Clock;

#[derive(Injectable)]
struct Scheduler {
    #[inject("clock")]
    clock: Arc<Clock>,
    #[inject(name = "timezone")]
    timezone: Option<Arc<String>>,
    ticks: u64,
}

fn main() {
    assert_eq!(Scheduler::wants(), &["clock", "timezone"]);
    let _ = |s: Scheduler| (s.clock, s.timezone, s.ticks);
}
