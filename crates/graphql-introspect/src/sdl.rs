//! Renders a decoded introspection result as SDL.

use crate::types::{
    IntrospectionField, IntrospectionInputValue, IntrospectionSchema, IntrospectionType,
    IntrospectionTypeRef,
};
use std::fmt::Write;

/// Scalars the schema builder already knows about
const BUILTIN_SCALARS: &[&str] = &["Int", "Float", "String", "Boolean", "ID"];

/// Directives the schema builder already knows about
const BUILTIN_DIRECTIVES: &[&str] = &["skip", "include", "deprecated", "specifiedBy", "oneOf"];

/// Converts an introspection result to SDL.
///
/// Built-in scalars, `__`-prefixed introspection types and built-in directives
/// are left out since every schema already carries them. An explicit
/// `schema { ... }` block is always written so root operation types never
/// depend on naming conventions.
#[must_use]
#[tracing::instrument(skip(schema), fields(types = schema.types.len()))]
pub fn introspection_to_sdl(schema: &IntrospectionSchema) -> String {
    let mut sdl = String::new();

    let roots = [
        ("query", &schema.query_type),
        ("mutation", &schema.mutation_type),
        ("subscription", &schema.subscription_type),
    ];
    if roots.iter().any(|(_, root)| root.is_some()) {
        sdl.push_str("schema {\n");
        for (operation, root) in roots {
            if let Some(root) = root {
                let _ = writeln!(sdl, "  {operation}: {}", root.name);
            }
        }
        sdl.push_str("}\n\n");
    }

    for directive in &schema.directives {
        if BUILTIN_DIRECTIVES.contains(&directive.name.as_str()) {
            continue;
        }

        write_description(&mut sdl, directive.description.as_deref(), 0);
        let _ = write!(sdl, "directive @{}", directive.name);
        write_arguments(&mut sdl, &directive.args);
        let _ = write!(sdl, " on {}\n\n", directive.locations.join(" | "));
    }

    let mut types_written = 0;
    for type_def in &schema.types {
        let name = type_def.name();
        if name.starts_with("__") || BUILTIN_SCALARS.contains(&name) {
            continue;
        }

        write_type(&mut sdl, type_def);
        sdl.push_str("\n\n");
        types_written += 1;
    }

    tracing::debug!(types_written, sdl_length = sdl.len(), "SDL generated");
    sdl.trim_end().to_string()
}

fn write_type(sdl: &mut String, type_def: &IntrospectionType) {
    match type_def {
        IntrospectionType::Scalar(t) => {
            write_description(sdl, t.description.as_deref(), 0);
            let _ = write!(sdl, "scalar {}", t.name);
        }
        IntrospectionType::Object(t) => {
            write_description(sdl, t.description.as_deref(), 0);
            let _ = write!(sdl, "type {}", t.name);
            write_implements(sdl, t.interfaces.as_deref().unwrap_or_default());
            write_fields(sdl, &t.fields);
        }
        IntrospectionType::Interface(t) => {
            write_description(sdl, t.description.as_deref(), 0);
            let _ = write!(sdl, "interface {}", t.name);
            write_implements(sdl, t.interfaces.as_deref().unwrap_or_default());
            write_fields(sdl, &t.fields);
        }
        IntrospectionType::Union(t) => {
            write_description(sdl, t.description.as_deref(), 0);
            let _ = write!(sdl, "union {}", t.name);
            let members: Vec<&str> = t.possible_types.iter().map(|m| m.name.as_str()).collect();
            if !members.is_empty() {
                let _ = write!(sdl, " = {}", members.join(" | "));
            }
        }
        IntrospectionType::Enum(t) => {
            write_description(sdl, t.description.as_deref(), 0);
            let _ = write!(sdl, "enum {}", t.name);
            if t.enum_values.is_empty() {
                return;
            }
            sdl.push_str(" {\n");
            for value in &t.enum_values {
                write_description(sdl, value.description.as_deref(), 1);
                let _ = write!(sdl, "  {}", value.name);
                write_deprecation(sdl, value.is_deprecated, value.deprecation_reason.as_deref());
                sdl.push('\n');
            }
            sdl.push('}');
        }
        IntrospectionType::InputObject(t) => {
            write_description(sdl, t.description.as_deref(), 0);
            let _ = write!(sdl, "input {}", t.name);
            if t.input_fields.is_empty() {
                return;
            }
            sdl.push_str(" {\n");
            for field in &t.input_fields {
                write_description(sdl, field.description.as_deref(), 1);
                sdl.push_str("  ");
                write_input_value(sdl, field);
                sdl.push('\n');
            }
            sdl.push('}');
        }
    }
}

fn write_implements(sdl: &mut String, interfaces: &[IntrospectionTypeRef]) {
    if interfaces.is_empty() {
        return;
    }
    let names: Vec<&str> = interfaces.iter().map(|i| i.name.as_str()).collect();
    let _ = write!(sdl, " implements {}", names.join(" & "));
}

// An empty field list is written without braces; `{}` is not valid SDL.
fn write_fields(sdl: &mut String, fields: &[IntrospectionField]) {
    if fields.is_empty() {
        return;
    }
    sdl.push_str(" {\n");
    for field in fields {
        write_description(sdl, field.description.as_deref(), 1);
        let _ = write!(sdl, "  {}", field.name);
        write_arguments(sdl, &field.args);
        let _ = write!(sdl, ": {}", field.type_ref);
        write_deprecation(sdl, field.is_deprecated, field.deprecation_reason.as_deref());
        sdl.push('\n');
    }
    sdl.push('}');
}

fn write_arguments(sdl: &mut String, args: &[IntrospectionInputValue]) {
    if args.is_empty() {
        return;
    }
    sdl.push('(');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            sdl.push_str(", ");
        }
        write_input_value(sdl, arg);
    }
    sdl.push(')');
}

fn write_input_value(sdl: &mut String, value: &IntrospectionInputValue) {
    let _ = write!(sdl, "{}: {}", value.name, value.type_ref);
    if let Some(default) = &value.default_value {
        let _ = write!(sdl, " = {default}");
    }
}

fn write_deprecation(sdl: &mut String, is_deprecated: bool, reason: Option<&str>) {
    if !is_deprecated {
        return;
    }
    match reason {
        Some(reason) => {
            let _ = write!(sdl, " @deprecated(reason: \"{}\")", escape_string(reason));
        }
        None => sdl.push_str(" @deprecated"),
    }
}

fn write_description(sdl: &mut String, description: Option<&str>, indent: usize) {
    let Some(description) = description else {
        return;
    };
    let indent_str = "  ".repeat(indent);
    if description.contains('\n') {
        let block = description.replace("\"\"\"", "\\\"\"\"");
        let _ = writeln!(sdl, "{indent_str}\"\"\"\n{block}\n{indent_str}\"\"\"");
    } else {
        let _ = writeln!(sdl, "{indent_str}\"{}\"", escape_string(description));
    }
}

/// Escape text for a single-line `"..."` string. Line terminators and other
/// control characters may not appear raw there; tab may.
fn escape_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push('\t'),
            c if u32::from(c) < 0x20 => {
                let _ = write!(escaped, "\\u{:04X}", u32::from(c));
            }
            c => escaped.push(c),
        }
    }
    escaped
}
