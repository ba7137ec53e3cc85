use arremate_core::error::ArremateError;
use arremate_core::ledger::Ledger;
use std::path::Path;

pub fn show(ledger_path: &Path) -> Result<(), ArremateError> {
    let ledger = Ledger::load(ledger_path)?;

    if ledger.is_empty() {
        println!("ledger is empty ({} not found or blank)", ledger_path.display());
        return Ok(());
    }

    for name in ledger.iter() {
        println!("{name}");
    }
    eprintln!("{} notice(s) recorded", ledger.len());
    Ok(())
}
