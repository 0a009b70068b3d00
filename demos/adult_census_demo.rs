use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    kanon::example_apps::run_adult_census_demo(std::env::args().skip(1))
}
