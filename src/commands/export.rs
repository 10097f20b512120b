use std::path::Path;

use anyhow::{Context, Result};
use hab_core::AppointmentService;
use owo_colors::OwoColorize;

pub fn run(service: &AppointmentService, output: Option<&Path>) -> Result<()> {
    let csv = service.export_csv();

    match output {
        Some(path) => {
            std::fs::write(path, &csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("{} {}", "Exported to".green(), path.display());
        }
        None => println!("{}", csv),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::book::tests::args;
    use crate::commands::memory_service;

    #[test]
    fn test_export_to_file() {
        let (_store, service) = memory_service();
        service.create(args().into_request()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appointments.csv");
        run(&service, Some(&path)).unwrap();

        let csv = std::fs::read_to_string(&path).unwrap();
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("\"Jane Doe\""));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let (_store, service) = memory_service();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("appointments.csv");

        assert!(run(&service, Some(&path)).is_err());
    }
}
