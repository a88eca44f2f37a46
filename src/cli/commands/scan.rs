use crate::cli::parser::Commands;
use crate::core::scan::ScanLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `scan` subcommand: decode and check only, nothing is sent.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Scan { project, payload } = cmd {
        let qr = ScanLogic::validate(payload, project)?;

        success(format!("{} belongs to project {}", qr.full_name(), project));
        for (label, value) in qr.fields() {
            println!("  {:<14}: {}", label, value);
        }
    }

    Ok(())
}
