//! Out-of-bounds reporting goes through the global logger, so this test lives
//! in its own binary where it can install one.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::{Level, LevelFilter, Log, Metadata, Record};
use turtlebmp::Turtle;

struct WarnCounter {
    warnings: AtomicUsize,
    last: std::sync::Mutex<String>,
}

impl Log for WarnCounter {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("turtlebmp")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) && record.level() == Level::Warn {
            self.warnings.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut last) = self.last.lock() {
                *last = record.args().to_string();
            }
        }
    }

    fn flush(&self) {}
}

static COUNTER: WarnCounter = WarnCounter {
    warnings: AtomicUsize::new(0),
    last: std::sync::Mutex::new(String::new()),
};

#[test]
fn only_the_first_hundred_misses_are_reported() {
    log::set_logger(&COUNTER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut turtle = Turtle::new(10, 10).unwrap();
    for i in 0..150 {
        turtle.draw_pixel(100 + i, 0).unwrap();
    }

    assert_eq!(turtle.out_of_bounds_count(), 150);
    assert_eq!(COUNTER.warnings.load(Ordering::SeqCst), 100);
    let last = COUNTER.last.lock().unwrap().clone();
    assert!(last.contains("(199, 0)"), "last warning was {:?}", last);
    assert!(last.contains("will not be reported"));
}
