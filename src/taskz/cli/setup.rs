use clap::Parser;
use taskz::filter::Filter;

/// Returns the version string, including git hash and commit date for
/// non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

fn parse_filter(s: &str) -> Result<Filter, String> {
    s.parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "taskz",
    bin_name = "taskz",
    version = get_version(),
    about = "Interactive in-memory task list for the terminal",
    long_about = None
)]
pub struct Cli {
    /// Seed the session with a task (repeatable)
    #[arg(short = 't', long = "task", value_name = "NAME")]
    pub tasks: Vec<String>,

    /// Seed the session with the demo list (Eat, Sleep, Repeat)
    #[arg(long)]
    pub demo: bool,

    /// Starting filter selector: all, active or completed
    #[arg(short, long, value_name = "SELECTOR", value_parser = parse_filter)]
    pub filter: Option<Filter>,

    /// Emit views as JSON lines instead of styled frames
    #[arg(long)]
    pub json: bool,
}
