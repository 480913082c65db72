use engine::EngineError;
use engine::run;

fn main() -> Result<(), EngineError> {
    env_logger::init();
    run(std::env::args().collect())
}
