
/// Routes `log` output of the code under test through the test harness.
pub(crate) fn init_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Trace)
        .try_init();
}
