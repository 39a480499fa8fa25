//! Prints documents using the same layout as graphql-js's `print()`.

use crate::document::Argument;
use crate::document::Definition;
use crate::document::Directive;
use crate::document::Document;
use crate::document::FragmentDefinition;
use crate::document::OperationDefinition;
use crate::document::OperationKind;
use crate::document::Selection;
use crate::document::Value;
use crate::document::VariableDefinition;
use std::fmt::Write;

const INDENT: &str = "  ";

pub(crate) fn print_document(doc: &Document) -> String {
    let definitions: Vec<String> =
        doc.definitions.iter()
            .map(|def| match def {
                Definition::Fragment(frag) => print_fragment(frag),
                Definition::Operation(op) => print_operation(op),
            })
            .collect();

    let mut out = definitions.join("\n\n");
    out.push('\n');
    out
}

fn print_operation(op: &OperationDefinition) -> String {
    let selection_set = print_selection_set(&op.selections, 0);
    if op.kind == OperationKind::Query
        && op.name.is_none()
        && op.variable_definitions.is_empty()
        && op.directives.is_empty() {
        return selection_set;
    }

    let mut name_and_vars = op.name.clone().unwrap_or_default();
    if !op.variable_definitions.is_empty() {
        let var_defs: Vec<String> =
            op.variable_definitions.iter()
                .map(print_variable_definition)
                .collect();
        let _ = write!(name_and_vars, "({})", var_defs.join(", "));
    }

    join_non_empty(&[
        op.kind.as_str().to_string(),
        name_and_vars,
        print_directives(&op.directives),
        selection_set,
    ])
}

fn print_fragment(frag: &FragmentDefinition) -> String {
    join_non_empty(&[
        format!("fragment {} on {}", frag.name, frag.type_condition),
        print_directives(&frag.directives),
        print_selection_set(&frag.selections, 0),
    ])
}

fn print_variable_definition(var_def: &VariableDefinition) -> String {
    let mut out = format!("${}: {}", var_def.name, var_def.var_type);
    if let Some(default_value) = &var_def.default_value {
        out.push_str(" = ");
        write_value(&mut out, default_value);
    }
    out
}

fn print_selection_set(selections: &[Selection], depth: usize) -> String {
    if selections.is_empty() {
        return String::new();
    }

    let outer_indent = INDENT.repeat(depth);
    let inner_indent = INDENT.repeat(depth + 1);
    let mut out = String::from("{\n");
    for selection in selections {
        out.push_str(&inner_indent);
        out.push_str(&print_selection(selection, depth + 1));
        out.push('\n');
    }
    out.push_str(&outer_indent);
    out.push('}');
    out
}

fn print_selection(selection: &Selection, depth: usize) -> String {
    match selection {
        Selection::Field(field) => {
            let mut head = String::new();
            if let Some(alias) = &field.alias {
                let _ = write!(head, "{alias}: ");
            }
            head.push_str(&field.name);
            head.push_str(&print_arguments(&field.arguments));
            join_non_empty(&[
                head,
                print_directives(&field.directives),
                print_selection_set(&field.selections, depth),
            ])
        },

        Selection::FragmentSpread(spread) => join_non_empty(&[
            format!("...{}", spread.fragment_name),
            print_directives(&spread.directives),
        ]),

        Selection::InlineFragment(inline) => join_non_empty(&[
            "...".to_string(),
            inline.type_condition.as_ref()
                .map(|type_name| format!("on {type_name}"))
                .unwrap_or_default(),
            print_directives(&inline.directives),
            print_selection_set(&inline.selections, depth),
        ]),
    }
}

fn print_arguments(args: &[Argument]) -> String {
    if args.is_empty() {
        return String::new();
    }
    let mut out = String::from("(");
    for (idx, arg) in args.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}: ", arg.name);
        write_value(&mut out, &arg.value);
    }
    out.push(')');
    out
}

fn print_directives(directives: &[Directive]) -> String {
    directives.iter()
        .map(|directive| {
            format!("@{}{}", directive.name, print_arguments(&directive.arguments))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Boolean(b) => {
            let _ = write!(out, "{b}");
        },
        Value::Enum(name) => out.push_str(name),
        // `{:?}` always keeps a `.` or exponent, so the literal re-parses as
        // a float.
        Value::Float(f) => {
            let _ = write!(out, "{f:?}");
        },
        Value::Int(i) => {
            let _ = write!(out, "{i}");
        },
        Value::List(items) => {
            out.push('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                write_value(out, item);
            }
            out.push(']');
        },
        Value::Null => out.push_str("null"),
        Value::Object(fields) => {
            out.push('{');
            for (idx, field) in fields.iter().enumerate() {
                if idx > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{}: ", field.name);
                write_value(out, &field.value);
            }
            out.push('}');
        },
        Value::String(s) => write_string(out, s),
        Value::Variable(name) => {
            let _ = write!(out, "${name}");
        },
    }
}

fn write_string(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            ch if (ch as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04X}", ch as u32);
            },
            ch => out.push(ch),
        }
    }
    out.push('"');
}

fn join_non_empty(parts: &[String]) -> String {
    parts.iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}
