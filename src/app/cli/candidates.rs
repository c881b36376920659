//! Candidates command implementation.

use crate::adapters::LocalFilesystem;
use crate::app::commands::resolve;
use crate::domain::AppError;

use super::TargetArgs;

pub(super) fn run_candidates(args: &TargetArgs) -> Result<(), AppError> {
    let candidates =
        resolve::list_candidates(&LocalFilesystem::new(), &args.target(), &args.options()?)?;
    println!("{}", serde_json::to_string_pretty(&candidates)?);
    Ok(())
}
