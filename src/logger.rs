/// Initializes env_logger. Logging is off unless `debug` is set, user
/// facing output goes to stdout directly.
pub fn init_logger(debug: bool) {
    env_logger::Builder::new()
        .filter_level(if debug {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();
}
