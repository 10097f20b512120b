use anyhow::Result;
use hab_core::AppointmentService;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize};

pub fn run(service: &AppointmentService) -> Result<()> {
    for line in lines(service) {
        println!("{}", line);
    }
    Ok(())
}

fn lines(service: &AppointmentService) -> Vec<String> {
    let records = service.get_all();

    if records.is_empty() {
        return vec!["No appointments found".dimmed().to_string()];
    }

    let mut lines: Vec<String> = records.iter().map(|r| r.render()).collect();
    let summary = format!("{} {}", records.len(), pluralize("appointment", records.len()));
    lines.push(summary.dimmed().to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::memory_service;
    use crate::commands::book::tests::args;

    #[test]
    fn test_empty_store() {
        let (_store, service) = memory_service();
        let lines = lines(&service);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("No appointments found"));
    }

    #[test]
    fn test_lists_every_record_with_summary() {
        let (_store, service) = memory_service();
        service.create(args().into_request()).unwrap();

        let lines = lines(&service);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Jane Doe"));
        assert!(lines[1].contains("1 appointment"));
    }
}
