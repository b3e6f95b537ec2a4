//! Build script for vtform-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates form.toml and turns it into Rust code (`$OUT_DIR/form.rs`)

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Must match `vtform_core::MAX_FIELDS`
const MAX_FIELDS: usize = 16;
/// Must match `vtform_core::MAX_FIELD_LEN`
const MAX_FIELD_LEN: i64 = 132;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    generate_form(&out_dir);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// A validated field from form.toml
struct Field {
    row: i64,
    col: i64,
    kind: Kind,
    label: Option<(i64, i64, String)>,
}

enum Kind {
    Text {
        max_length: i64,
        allow_lowercase: bool,
        allow_spaces: bool,
        url_mode: bool,
        initial: String,
    },
    Boolean {
        state: bool,
    },
}

fn generate_form(out_dir: &Path) {
    println!("cargo:rerun-if-changed=form.toml");

    let content = match fs::read_to_string("form.toml") {
        Ok(content) => content,
        Err(e) => fail("Failed to read form.toml", &[e.to_string()]),
    };
    let form: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in form.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let fields = validate(&form);

    let mut code = String::new();
    code.push_str("// Generated from form.toml by build.rs\n\n");
    code.push_str("/// Fields of the demo form, in Tab order\n");
    code.push_str("pub fn form_config() -> FormConfig {\n    FormConfig::new()\n");
    for field in &fields {
        match &field.kind {
            Kind::Text {
                max_length,
                allow_lowercase,
                allow_spaces,
                url_mode,
                initial,
            } => {
                writeln!(
                    code,
                    "        .with(FieldConfig::text({}, {}, {}, TextPolicy {{ \
                     allow_lowercase: {}, allow_spaces: {}, url_mode: {} }})\
                     .with_initial({:?}))",
                    field.row, field.col, max_length, allow_lowercase, allow_spaces, url_mode, initial
                )
                .unwrap();
            }
            Kind::Boolean { state } => {
                writeln!(
                    code,
                    "        .with(FieldConfig::boolean({}, {}, {}))",
                    field.row, field.col, state
                )
                .unwrap();
            }
        }
    }
    code.push_str("}\n\n");

    code.push_str("/// Static labels as (row, col, text)\n");
    code.push_str("pub const LABELS: &[(u16, u16, &str)] = &[\n");
    for (row, col, text) in fields.iter().filter_map(|f| f.label.as_ref()) {
        writeln!(code, "    ({}, {}, {:?}),", row, col, text).unwrap();
    }
    code.push_str("];\n");

    fs::write(out_dir.join("form.rs"), code).unwrap();
}

fn validate(form: &toml::Value) -> Vec<Field> {
    let entries = match form.get("field") {
        Some(toml::Value::Array(entries)) => entries,
        Some(_) => fail("Invalid form.toml", &["'field' must be an array of tables".into()]),
        None => fail("Invalid form.toml", &["Missing [[field]] - at least one field is required".into()]),
    };

    let mut errors = Vec::new();
    if entries.is_empty() {
        errors.push("at least one [[field]] is required".to_string());
    }
    if entries.len() > MAX_FIELDS {
        errors.push(format!("at most {} fields are supported", MAX_FIELDS));
    }

    let mut fields = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        let Some(table) = entry.as_table() else {
            errors.push(format!("field {} must be a table", i));
            continue;
        };

        let row = coordinate(table.get("row"), i, "row", &mut errors);
        let col = coordinate(table.get("col"), i, "col", &mut errors);
        let flag = |name: &str| table.get(name).and_then(toml::Value::as_bool).unwrap_or(false);

        let kind = match table.get("kind").and_then(toml::Value::as_str) {
            Some("text") => {
                let max_length = table.get("max_length").and_then(toml::Value::as_integer);
                let max_length = match max_length {
                    Some(n) if (1..=MAX_FIELD_LEN).contains(&n) => n,
                    Some(_) => {
                        errors.push(format!("field {} max_length must be 1-{}", i, MAX_FIELD_LEN));
                        1
                    }
                    None => {
                        errors.push(format!("field {} missing 'max_length'", i));
                        1
                    }
                };
                let initial = table
                    .get("initial")
                    .and_then(toml::Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                if !initial.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
                    errors.push(format!("field {} initial must be printable ASCII", i));
                }
                Kind::Text {
                    max_length,
                    allow_lowercase: flag("allow_lowercase"),
                    allow_spaces: flag("allow_spaces"),
                    url_mode: flag("url_mode"),
                    initial,
                }
            }
            Some("boolean") => Kind::Boolean {
                state: flag("state"),
            },
            Some(other) => {
                errors.push(format!("field {} kind must be 'text' or 'boolean', not '{}'", i, other));
                continue;
            }
            None => {
                errors.push(format!("field {} missing 'kind'", i));
                continue;
            }
        };

        let label = match table.get("label") {
            Some(toml::Value::Table(label)) => {
                let text = label.get("text").and_then(toml::Value::as_str);
                match text {
                    Some(text) => Some((
                        coordinate(label.get("row"), i, "label row", &mut errors),
                        coordinate(label.get("col"), i, "label col", &mut errors),
                        text.to_string(),
                    )),
                    None => {
                        errors.push(format!("field {} label missing 'text'", i));
                        None
                    }
                }
            }
            Some(_) => {
                errors.push(format!("field {} label must be a table", i));
                None
            }
            None => None,
        };

        fields.push(Field { row, col, kind, label });
    }

    if !errors.is_empty() {
        fail("Invalid field configuration in form.toml", &errors);
    }
    fields
}

fn coordinate(value: Option<&toml::Value>, index: usize, name: &str, errors: &mut Vec<String>) -> i64 {
    match value.and_then(toml::Value::as_integer) {
        Some(n) if (1..=u16::MAX as i64).contains(&n) => n,
        Some(_) => {
            errors.push(format!("field {} {} must be 1-{}", index, name, u16::MAX));
            1
        }
        None => {
            errors.push(format!("field {} missing '{}'", index, name));
            1
        }
    }
}

fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| format!("║  • {:<62} ║", line))
        .collect::<Vec<_>>()
        .join("\n");
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<57}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
