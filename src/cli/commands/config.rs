//! Config Command
//!
//! Print the effective configuration (file merged with `INCLUDEGEN_*`).

use std::path::PathBuf;

use super::generate::resolve_project_dir;
use crate::config::ConfigLoader;
use crate::types::Result;

pub fn show(project_dir: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let root = resolve_project_dir(project_dir)?;
    let path = config.unwrap_or_else(|| ConfigLoader::project_config_path(&root));
    let effective = ConfigLoader::load(&root, Some(path.as_path()))?;

    println!("# Config: {}\n", path.display());
    print!("{}", ConfigLoader::to_toml(&effective)?);
    Ok(())
}
