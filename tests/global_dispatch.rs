//! Process-wide installation. Kept in its own test binary with a single test
//! so nothing else installs concurrently.

use moelog::{Level, MemoryOutput, MoeLogger, dispatch, get_logger, quick_setup};

#[test]
fn installation_replaces_and_setup_reinstalls() {
    let first_out = MemoryOutput::new();
    let first = MoeLogger::builder()
        .colors(false)
        .console_output(first_out.clone())
        .build()
        .unwrap();
    assert!(first.is_installed());

    let global = get_logger("jobs");
    global.error("to first");
    assert_eq!(first_out.lines().len(), 1);
    assert!(first_out.lines()[0].contains("jobs | global_dispatch | LN"));

    let second_out = MemoryOutput::new();
    let second = MoeLogger::builder()
        .colors(false)
        .console_output(second_out.clone())
        .build()
        .unwrap();
    assert!(!first.is_installed());
    assert!(second.is_installed());

    global.error("to second");
    assert_eq!(first_out.lines().len(), 1);
    assert_eq!(second_out.lines().len(), 1);

    // Re-installing is idempotent: one handler set, one line per record.
    first.setup();
    first.setup();
    global.error("back to first");
    assert_eq!(first_out.lines().len(), 2);
    assert_eq!(second_out.lines().len(), 1);

    // A bound logger keeps writing to its own handlers.
    second.root().error("bound");
    assert_eq!(second_out.lines().len(), 2);

    first.shutdown().unwrap();
    assert!(dispatch::active().is_none());
    global.error("dropped");
    assert_eq!(second_out.lines().len(), 2);

    // Shutting down a logger that is not installed leaves the active one alone.
    second.setup();
    let third = MoeLogger::builder()
        .console_output(MemoryOutput::new())
        .build()
        .unwrap();
    second.setup();
    third.shutdown().unwrap();
    assert!(second.is_installed());

    dispatch::clear();
    assert!(!second.is_installed());
    global.critical("nowhere");
    assert_eq!(second_out.lines().len(), 2);

    let quick = quick_setup().unwrap();
    assert!(quick.is_installed());
    assert_eq!(quick.effective_level(), &Level::INFO);
    assert!(quick.file_handler().is_none());
    assert!(quick.config().colors);
    quick.shutdown().unwrap();
    assert!(dispatch::active().is_none());
}
