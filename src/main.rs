fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Chess move generator - interactive terminal");
    chess_movegen::mock::run_interactive_terminal();
}
