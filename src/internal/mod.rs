//! moelog's own diagnostics ("TIMER already defined", level fallbacks, the
//! chosen log file). They go through whatever dispatch is active, under the
//! logger name `moelog`, so they obey the same thresholds and formats as
//! application records. With nothing installed they vanish.

use crate::dispatch;
use crate::level::Level;
use crate::record::{Callsite, LogRecord};

pub const LOGGER_NAME: &str = "moelog";

#[track_caller]
fn log(level: Level, msg: &str) {
    let Some(active) = dispatch::active() else {
        return;
    };
    if !active.enabled(&level) {
        return;
    }
    let record = LogRecord::new(level, LOGGER_NAME, Callsite::caller(), msg);
    active.dispatch(&record);
}

#[track_caller]
pub fn debug(msg: &str) {
    log(Level::DEBUG, msg);
}
