// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help() {
    println!(
        "Tickmark v{} - Checklist / TODO extraction for markdown vaults",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    tickmark [OPTIONS] [--root <vault>]");
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Vault directory to scan (default: current directory).");
    println!("    -c, --config <path>   Read settings from a TOML file.");
    println!("    -t, --tag <name>      Tag to extract (repeatable; overrides the config).");
    println!("    -a, --all             Extract from every document, tagged or not.");
    println!("        --show-done       Include completed items in the output.");
    println!("    -v, --verbose         Debug logging.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("EXAMPLES:");
    println!("    tickmark --root ~/notes                 Items from blocks tagged #todo");
    println!("    tickmark --root ~/notes --tag chores    Items from blocks tagged #chores");
    println!("    tickmark --root ~/notes --all           Every checklist item in the vault");
    println!();
    println!("CHECKLIST SYNTAX:");
    println!("    - [ ] open item        - [x] done       - [!] important");
    println!("    - [/] in progress      - [-] canceled   - [?] question");
    println!("    Items are grouped under the #tag block they follow, or the");
    println!("    whole file when the tag appears in front matter.");
}
