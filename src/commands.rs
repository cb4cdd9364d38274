// src/commands.rs

use anyhow::{
    Context,
    Result
};
use std::{
    env,
    fs,
    path::Path
};
use crate::rewrite;

pub fn run_cli() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut attrs: Vec<String> = vec![rewrite::DEFAULT_ATTR.to_string()];
    let mut positional: Vec<&str> = Vec::new();
    for arg in &args {
        if let Some(name) = parse_attr(arg) {
            if !attrs.iter().any(|a| a == name) {
                attrs.push(name.to_string());
            }
        } else {
            positional.push(arg.as_str());
        }
    }

    let [input, output] = positional.as_slice() else {
        print_usage();
        std::process::exit(2);
    };

    let attr_refs: Vec<&str> = attrs.iter().map(String::as_str).collect();
    let rewritten = convert(Path::new(input), Path::new(output), &attr_refs)?;
    println!("Rewrote {rewritten} class attribute(s). Output written to {output}");
    Ok(())
}

/// Read `input` in full, rewrite every matched attribute span, write the
/// result to `output` (overwriting without confirmation). Returns the number
/// of spans rewritten. Either the full output is written or nothing is.
pub fn convert(input: &Path, output: &Path, attrs: &[&str]) -> Result<usize> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;

    let result = rewrite::rewrite_attrs(&source, attrs);

    fs::write(output, &result.text)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(result.rewritten)
}

/// Support: `--attr=class` (repeatable).
fn parse_attr(arg: &str) -> Option<&str> {
    let rest = arg.trim().strip_prefix("--attr=")?;
    if rest.is_empty() { None } else { Some(rest) }
}

fn print_usage() {
    println!(
r#"
classmod — rewrite class attributes into CSS-Modules expressions

USAGE:
    classmod <input-path> <output-path> [--attr=NAME]...

    <input-path>    UTF-8 HTML/JSX-like text, read in full
    <output-path>   rewritten text, overwritten without confirmation
    --attr=NAME     also match NAME="..." in addition to className="..."
                    (e.g. --attr=class for raw HTML input)

Every className="a b-c" becomes className={{ `${{styles.a}} ${{styles["b-c"]}}` }};
a single token becomes className={{ styles.a }}. All other text is untouched.
"#    );
}
