use crate::error::ErrorType;
use crate::table::Table;
use serde_json::{json, Map, Value as JsonValue};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Arma el documento json con los datos de la tabla:
/// `{ "<tabla>": [ { "<columna>": valor, ... }, ... ] }`, una entrada por fila.
pub fn table_to_json(table: &Table) -> Result<JsonValue, ErrorType> {
    let mut filas = Vec::with_capacity(table.row_count());

    for row in table.rows() {
        let mut objeto = Map::new();
        for (columna, valor) in table.columns().iter().zip(row.values.iter()) {
            objeto.insert(columna.name.clone(), serde_json::to_value(valor)?);
        }
        filas.push(JsonValue::Object(objeto));
    }

    let mut documento = Map::new();
    documento.insert(table.name.clone(), JsonValue::Array(filas));
    Ok(JsonValue::Object(documento))
}

/// Documento con la estructura de la tabla (nombre y tipo de cada columna).
pub fn schema_to_json(table: &Table) -> Result<JsonValue, ErrorType> {
    Ok(json!({
        "table": table.name,
        "columns": serde_json::to_value(table.columns())?,
    }))
}

pub fn write_json(ruta: &Path, documento: &JsonValue) -> Result<(), ErrorType> {
    let file = File::create(ruta)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, documento)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
