use std::path::Path;

use gs_session::RollLog;

pub fn run(file: &Path, format: &str) -> Result<(), String> {
    let json = std::fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let log = RollLog::from_json(&json).map_err(|e| e.to_string())?;

    match format {
        "lines" => {
            if log.is_empty() {
                println!("  No rolls yet.");
            }
            for line in log.render() {
                println!("{line}");
            }
        }
        "markdown" | "md" => print!("{}", log.export_markdown()),
        "text" | "txt" => print!("{}", log.export_text()),
        other => return Err(format!("unknown format: {other} (expected lines, markdown, text)")),
    }

    Ok(())
}
