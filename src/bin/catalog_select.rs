use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    catalog_sampler::apps::run_catalog_select(std::env::args().skip(1))
}
