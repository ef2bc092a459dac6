use std::env;
use std::fs;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    // Data files live under the crate directory so they are included in the
    // crate tarball and `cargo publish` / `cargo install` work correctly.
    let data_dir = Path::new(&manifest_dir).join("assets").join("data");

    compile_confusables(&data_dir, &out_dir);

    println!("cargo:rerun-if-changed=assets/data/confusables.txt");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse the Unicode confusables file into a generated `(source, replacement)`
/// table. Field 1 is the confusable code point, field 2 the code point
/// sequence it resembles; anything after `#` is commentary.
fn compile_confusables(data_dir: &Path, out_dir: &str) {
    let confusables_path = data_dir.join("confusables.txt");
    let content = fs::read_to_string(&confusables_path)
        .unwrap_or_else(|e| panic!("Failed to read confusables.txt: {e}"));

    let mut entries = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let data = line.split('#').next().unwrap_or("");
        let fields: Vec<&str> = data.split(';').collect();
        if fields.len() < 2 {
            continue;
        }
        let Some(source) = decode_hex_field(fields[0]) else {
            continue;
        };
        let Some(replacement) = decode_hex_field(fields[1]) else {
            continue;
        };
        // Only single-scalar sources are confusable keys.
        let mut scalars = source.chars();
        if let (Some(src), None) = (scalars.next(), scalars.next()) {
            entries.push((src as u32, replacement));
        }
    }

    let mut code = String::new();
    code.push_str("/// Auto-generated confusable character table.\n");
    code.push_str("pub const CONFUSABLE_TABLE: &[(u32, &str)] = &[\n");
    for (src, replacement) in &entries {
        code.push_str(&format!(
            "    (0x{src:04X}, \"{}\"),\n",
            escape_literal(replacement)
        ));
    }
    code.push_str("];\n");
    let count = entries.len();
    code.push_str(&format!("\npub const CONFUSABLE_COUNT: usize = {count};\n"));

    let out_path = Path::new(out_dir).join("confusables_gen.rs");
    fs::write(&out_path, code).unwrap();
}

/// Decode a whitespace-separated sequence of hex code points into a string.
fn decode_hex_field(field: &str) -> Option<String> {
    let mut decoded = String::new();
    for token in field.split_whitespace() {
        let scalar = u32::from_str_radix(token, 16).ok()?;
        decoded.push(char::from_u32(scalar)?);
    }
    if decoded.is_empty() {
        None
    } else {
        Some(decoded)
    }
}

fn escape_literal(s: &str) -> String {
    s.chars().map(|c| format!("\\u{{{:04X}}}", c as u32)).collect()
}
