pub mod gameplay;
pub mod players;

/// Cumulative points held by one side of the table.
pub type Score = u8;

/// Fixed match length. The round counter starts at 1 and the match is
/// terminal once it passes this bound.
pub const N_ROUNDS: u8 = 3;

/// Initialize terminal logging behind the log facade.
/// Gameplay output goes to stdout directly; the logger carries
/// state-transition traces at debug level.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
