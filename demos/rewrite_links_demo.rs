use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    helpshell::example_apps::run_rewrite_links_demo(std::env::args().skip(1))
}
