use arremate_core::error::ArremateError;
use arremate_core::BatchOutcome;

pub fn print(outcome: &BatchOutcome) -> Result<(), ArremateError> {
    let json = serde_json::to_string_pretty(outcome)?;
    println!("{json}");
    Ok(())
}
