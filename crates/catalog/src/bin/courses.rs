use catalog::{
    config::Config,
    courses::{build_catalog, departments::departments, first_pass::ScrapedCourse},
    error::CatalogError,
    util::{ensure_dir, read_json, write_json},
};
use log::{error, info};
use std::{process::ExitCode, time::Instant};

/// Compiled course list
const COURSES_FILE: &str = "courses.json";
/// Departments seen in the course list
const DEPARTMENTS_FILE: &str = "departments.json";

/// Reads the scraped courses, runs both passes, and writes the results
fn run(config: &Config) -> Result<(), CatalogError> {
    ensure_dir(&config.output_dir)?;

    let scraped: Vec<ScrapedCourse> = read_json(&config.input)?;
    info!(
        "Loaded {} scraped courses from {}",
        scraped.len(),
        config.input.display()
    );

    let courses = build_catalog(scraped)?;
    let departments = departments(&courses);

    write_json(&config.output_dir.join(COURSES_FILE), &courses)?;
    info!("Wrote {COURSES_FILE} ({})", courses.len());

    write_json(&config.output_dir.join(DEPARTMENTS_FILE), &departments)?;
    info!("Wrote {DEPARTMENTS_FILE} ({})", departments.len());

    Ok(())
}

/// Compiles the requisites of a scraped course catalog
fn main() -> ExitCode {
    env_logger::init();

    let config = Config::from_env();
    let started = Instant::now();

    match run(&config) {
        Ok(()) => {
            info!(
                "Done in {:.1?}; output in {}",
                started.elapsed(),
                config.output_dir.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
