use std::path::Path;

use colored::Colorize;
use gs_core::AttributeBlock;
use gs_session::{Session, SessionConfig};

pub struct ShowArgs<'a> {
    pub id: &'a str,
    pub base: Option<&'a str>,
    pub modifiers: &'a [String],
    pub name: Option<&'a str>,
    pub json: bool,
    pub classes: Option<&'a Path>,
}

pub fn run(args: &ShowArgs<'_>) -> Result<(), String> {
    let registry = super::load_registry(args.classes)?;

    let mut config = SessionConfig::default();
    if let Some(base) = args.base {
        let base: AttributeBlock = base.parse().map_err(|e| format!("--base: {e}"))?;
        config = config.with_base(base);
    }
    if let Some(name) = args.name {
        config = config.with_name(name);
    }

    let mut session = Session::new(config);
    session
        .select_class(&registry, args.id)
        .map_err(|e| e.to_string())?;
    for modifier in args.modifiers {
        let delta: AttributeBlock = modifier
            .parse()
            .map_err(|e| format!("--modifier: {e}"))?;
        session.apply_modifier(&delta);
    }

    let character = session.character();

    if args.json {
        let json = serde_json::to_string_pretty(character).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let sheet = character.to_string();
    let (title, body) = sheet.split_once('\n').unwrap_or((sheet.as_str(), ""));
    println!("{}", title.bold());
    print!("{body}");

    Ok(())
}
