// Project status banner for the Real-Time Page View Tracking System
use pageview_shared::{DEFAULT_PORT, HEALTH_PATH};
use std::io::{self, Write};

fn banner_lines() -> Vec<String> {
    vec![
        "Real-Time Page View Tracking System".to_string(),
        String::new(),
        "✅ PR #1: Project initialized successfully!".to_string(),
        "✅ PR #2: API Gateway service created!".to_string(),
        String::new(),
        "To run the API Gateway:".to_string(),
        "  1. cargo build --workspace".to_string(),
        "  2. cargo run -p pageview-api-gateway".to_string(),
        format!("  3. curl http://localhost:{}{}", DEFAULT_PORT, HEALTH_PATH),
        String::new(),
        "For detailed instructions, see README.md".to_string(),
    ]
}

fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    for line in banner_lines() {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

fn main() {
    // 输出失败（如管道已关闭）不影响退出码
    let _ = write_banner(&mut io::stdout().lock());
}
