use anyhow::Result;
use hab_core::AppointmentService;
use owo_colors::OwoColorize;

pub fn run(service: &AppointmentService, id: i64) -> Result<()> {
    service.delete(id)?;
    println!("{} appointment {}", "Deleted".red(), id);
    Ok(())
}
