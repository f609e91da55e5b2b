//! `imgdl format-name <name>` – print the normalized form of a name.

use imgdl_core::format_name;

pub fn run_format_name(name: &str) {
    println!("{}", format_name(name));
}
