//! Build script to generate embedded dictionaries
//!
//! Reads word list files and generates Rust source code with const arrays.
//! Lines that are not exactly five ASCII letters are dropped.

use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Primary dictionary: answers are normally drawn from here
    generate_word_list(
        &["data/primary.txt"],
        &Path::new(&out_dir).join("primary.rs"),
        "PRIMARY",
        "Primary dictionary, consulted first",
    );

    // Extended dictionary: primary plus the extra fallback words
    generate_word_list(
        &["data/primary.txt", "data/extended.txt"],
        &Path::new(&out_dir).join("extended.rs"),
        "EXTENDED",
        "Extended fallback dictionary (superset of PRIMARY)",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/primary.txt");
    println!("cargo:rerun-if-changed=data/extended.txt");
}

fn generate_word_list(inputs: &[&str], output_path: &Path, const_name: &str, doc_comment: &str) {
    let mut words = BTreeSet::new();

    for input_path in inputs {
        let content = fs::read_to_string(input_path)
            .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

        for line in content.lines() {
            let word = line.trim().to_ascii_lowercase();
            if word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()) {
                words.insert(word);
            }
        }
    }

    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
