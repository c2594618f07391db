use dirimport_core::{DEFAULT_EXPORT, Statement};
use oxc_syntax::identifier::is_identifier_name;

/// JavaScript text for one generated statement.
pub fn render(statement: &Statement) -> String {
    match statement {
        Statement::DeclareContainer { container } => format!("const {} = {{}};", container),
        Statement::ImportNamespace { local, source } => {
            format!("import * as {} from {};", local, string_literal(source))
        }
        Statement::AssignProperty { container, property, binding } => {
            format!("{} = {};", member(container, property), binding)
        }
        Statement::SpreadExports { container, property, binding } => format!(
            "for (let key in {binding}) {{\n  {container}[key === {default} ? {property} : key] = {binding}[key];\n}}",
            binding = binding,
            container = container,
            default = string_literal(DEFAULT_EXPORT),
            property = string_literal(property),
        ),
        Statement::BindContainer { local, container } => format!("const {} = {};", local, container),
        Statement::BindMember { local, container, member: name } => {
            format!("const {} = {};", local, member(container, name))
        }
    }
}

/// Statements one per line, in order.
pub fn render_all(statements: &[Statement]) -> String {
    statements.iter().map(render).collect::<Vec<_>>().join("\n")
}

/// Double-quoted, escaped string literal.
fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// `object.property`, or `object["property"]` when the property is not an identifier.
fn member(object: &str, property: &str) -> String {
    if is_identifier_name(property) {
        format!("{}.{}", object, property)
    } else {
        format!("{}[{}]", object, string_literal(property))
    }
}
