use crate::error::ErrorType;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Busca la mayor cantidad de campos por línea del archivo csv.
/// Sirve para comparar contra la cantidad de columnas que declara el schema.
pub fn count_columns(ruta_csv: &Path, delimiter: char) -> Result<usize, ErrorType> {
    let file = File::open(ruta_csv)?;
    let reader = BufReader::new(file);
    let mut max_columnas = 0;

    for line in reader.lines() {
        let cantidad = line?.split(delimiter).count();
        if cantidad > max_columnas {
            max_columnas = cantidad;
        }
    }

    Ok(max_columnas)
}
