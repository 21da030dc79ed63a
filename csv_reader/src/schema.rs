use crate::column_type::ColumnType;
use crate::error::ErrorType;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// Posición de cada dato dentro de una línea del schema
const SCHEMA_INDEX: usize = 0;
const SCHEMA_NAME: usize = 1;
const SCHEMA_TYPE: usize = 2;

/// Describe una columna declarada en el archivo de schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub index: i32,
    pub name: String,
    pub column_type: ColumnType,
}

/// Lee el archivo de schema (`indice,nombre,tipo` por línea).
/// Sin ruta devuelve una lista vacía.
pub fn read_schema(
    ruta_schema: Option<&Path>,
    delimiter: char,
) -> Result<Vec<ColumnDescriptor>, ErrorType> {
    let ruta = match ruta_schema {
        Some(ruta) => ruta,
        None => return Ok(Vec::new()),
    };

    let file = File::open(ruta)?;
    let reader = BufReader::new(file);
    let mut schema = Vec::new();

    for (numero, line) in reader.lines().enumerate() {
        let line = line?;
        // Las líneas vacías o sin separador se ignoran, no se reutiliza la anterior
        if line.is_empty() || !line.contains(delimiter) {
            debug!("Linea {} del schema ignorada: {:?}", numero + 1, line);
            continue;
        }
        schema.push(parsear_linea_schema(&line, delimiter, numero + 1)?);
    }

    Ok(schema)
}

fn parsear_linea_schema(
    line: &str,
    delimiter: char,
    numero: usize,
) -> Result<ColumnDescriptor, ErrorType> {
    let partes: Vec<&str> = line.split(delimiter).collect();

    let index = partes[SCHEMA_INDEX].trim().parse::<i32>().map_err(|_| {
        ErrorType::InvalidSchema(format!(
            "line {}: index '{}' is not an integer",
            numero, partes[SCHEMA_INDEX]
        ))
    })?;
    let name = partes[SCHEMA_NAME].to_string();
    let type_name = partes.get(SCHEMA_TYPE).copied().unwrap_or_default();

    Ok(ColumnDescriptor {
        index,
        name,
        column_type: ColumnType::resolve_or_text(type_name),
    })
}
