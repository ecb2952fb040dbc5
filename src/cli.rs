// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "Parlance v{} - Natural-language command parser for assistant chat input",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] <utterance...>     Parse one utterance and print the result", binary_name);
    println!("    {} [OPTIONS]                    Read utterances line by line from stdin", binary_name);
    println!("    {} --help                       Show this help message", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -j, --json             Print the full parsed intent as JSON");
    println!("    -d, --date <ISO>       Reference date (2026-08-25 or 2026-08-25T09:30)");
    println!("    -v, --verbose          Enable debug logging");
    println!("    -h, --help             Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    {} \"Meeting tomorrow at 3pm\"", binary_name);
    println!("    {} --json \"Log $45 for lunch\"", binary_name);
    println!("    {} -d 2026-01-05 \"What's on next monday?\"", binary_name);
}
