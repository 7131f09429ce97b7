use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    helpshell::example_apps::run_compose_feedback_demo(std::env::args().skip(1))
}
