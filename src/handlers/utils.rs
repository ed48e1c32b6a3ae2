use crate::analyzer::dataset_health::all_scenarios;
use colored::Colorize;

/// Print the built-in mock scenarios.
pub fn handle_scenarios() -> crate::Result<()> {
    println!("🧪 Mock scenarios (use with `inspect dataset <NAME> --mock --scenario <SCENARIO>`):");
    let count = all_scenarios().len();
    for (i, s) in all_scenarios().iter().enumerate() {
        let branch = if i + 1 == count { "└──" } else { "├──" };
        println!("{} {:<18} {}", branch, s.name.bright_cyan(), s.description);
    }
    Ok(())
}

/// Print version, build metadata and target.
pub fn handle_version() -> crate::Result<()> {
    println!("{}", version_info());
    Ok(())
}

/// Commit and date are stamped by the release build through
/// `FLUIDCTL_GIT_COMMIT` and `FLUIDCTL_BUILD_DATE`.
fn version_info() -> String {
    format!(
        "fluidctl {}\nCommit: {}\nBuilt: {}\nTarget: {}/{}",
        crate::VERSION,
        option_env!("FLUIDCTL_GIT_COMMIT").unwrap_or("unknown"),
        option_env!("FLUIDCTL_BUILD_DATE").unwrap_or("unknown"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
