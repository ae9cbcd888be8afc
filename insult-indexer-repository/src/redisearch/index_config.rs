//! RediSearch index creation arguments.

use crate::types::IndexDefinition;

/// Build the `FT.CREATE` arguments for an index definition.
///
/// Produces `<name> ON JSON PREFIX 1 <prefix> SCHEMA <path> AS <alias> <TYPE> ...`,
/// indexing JSON document bodies rather than flat hash fields.
pub fn create_index_args(definition: &IndexDefinition) -> Vec<String> {
    let mut args = vec![
        definition.name.clone(),
        "ON".to_string(),
        "JSON".to_string(),
        "PREFIX".to_string(),
        "1".to_string(),
        definition.prefix.clone(),
        "SCHEMA".to_string(),
    ];

    for field in &definition.fields {
        args.push(field.path.clone());
        args.push("AS".to_string());
        args.push(field.alias.clone());
        args.push(field.kind.as_str().to_string());
    }

    args
}

/// Build the `FT.CREATE` command for an index definition.
pub(crate) fn create_index_command(definition: &IndexDefinition) -> redis::Cmd {
    let mut cmd = redis::cmd("FT.CREATE");
    for arg in create_index_args(definition) {
        cmd.arg(arg);
    }
    cmd
}
