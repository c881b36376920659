//! Resolve command implementation.

use crate::adapters::LocalFilesystem;
use crate::app::commands::resolve;
use crate::domain::AppError;

use super::TargetArgs;

pub(super) fn run_resolve(args: &TargetArgs, use_async: bool, json: bool) -> Result<(), AppError> {
    let target = args.target();
    let options = args.options()?;
    let fs = LocalFilesystem::new();

    let directory = if use_async {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(resolve::execute_async(&fs, &target, &options))?
    } else {
        resolve::execute(&fs, &target, &options)?
    };

    if json {
        let output = serde_json::json!({
            "target": target.to_string(),
            "directory": directory.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", directory.display());
    }
    Ok(())
}
