use salah::{CalculationMethod, Madhab, SalahOptions, Schedule};

fn main() -> salah::Result<()> {
    let schedule = Schedule::new(
        SalahOptions::new(43.8975, -78.9429)
            .with_time_zone("America/Toronto")
            .with_madhab(Madhab::Hanafi)
            .with_method(CalculationMethod::isna()),
    )?;

    let resolved = schedule.resolved();
    println!(
        "{} / {} / {}",
        resolved.time_zone, resolved.method_id, resolved.madhab
    );
    print!("{}", schedule.today(&[])?);
    Ok(())
}
