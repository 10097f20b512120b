use anyhow::Result;
use hab_core::AppointmentService;

use crate::render::render_detail;

pub fn run(service: &AppointmentService, reference: &str) -> Result<()> {
    let record = service.find_by_reference(reference)?;

    for line in render_detail(&record) {
        println!("{}", line);
    }

    Ok(())
}
