//! Build script to embed the word lists
//!
//! Turns the plain-text lists under `data/` into `&[&str]` constants so the game
//! works offline with no files next to the binary.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

struct WordListSpec {
    input: &'static str,
    output: &'static str,
    const_name: &'static str,
    doc: &'static str,
}

const LISTS: [WordListSpec; 2] = [
    WordListSpec {
        input: "data/answers.txt",
        output: "answers.rs",
        const_name: "ANSWERS",
        doc: "Words the local word source draws secrets from",
    },
    WordListSpec {
        input: "data/allowed.txt",
        output: "allowed.rs",
        const_name: "ALLOWED",
        doc: "Words accepted as guesses by the embedded dictionary",
    },
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap_or_else(|e| panic!("OUT_DIR not set: {e}"));

    for list in &LISTS {
        embed_word_list(list, &Path::new(&out_dir).join(list.output));
        println!("cargo:rerun-if-changed={}", list.input);
    }
}

fn embed_word_list(list: &WordListSpec, output_path: &Path) {
    let content = fs::read_to_string(list.input)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", list.input));

    // Blank lines and `#` comments are allowed in the data files
    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_ascii_lowercase)
        .collect();

    let mut source = String::new();
    source.push_str(&format!("// Generated from {}\n\n", list.input));
    source.push_str(&format!("/// {}\n", list.doc));
    source.push_str(&format!("pub const {}: &[&str] = &[\n", list.const_name));
    for word in &words {
        source.push_str(&format!("    {word:?},\n"));
    }
    source.push_str("];\n\n");
    source.push_str(&format!("/// Number of words in {}\n", list.const_name));
    source.push_str(&format!(
        "pub const {}_COUNT: usize = {};\n",
        list.const_name,
        words.len()
    ));

    fs::File::create(output_path)
        .and_then(|mut file| file.write_all(source.as_bytes()))
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));
}
