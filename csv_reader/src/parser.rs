use crate::column_type::ColumnType;
use crate::config::ReaderConfig;
use crate::error::ErrorType;
use crate::scanner::count_columns;
use crate::schema::{read_schema, ColumnDescriptor};
use crate::table::{Column, Table};
use crate::value::Value;
use log::{debug, info};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Archivo csv leído a memoria, junto con el schema que se usó para tiparlo.
#[derive(Debug, Clone)]
pub struct Csv {
    pub csv_file: PathBuf,
    pub schema: Vec<ColumnDescriptor>,
    pub data: Table,
    column_count: usize,
    uses_schema: bool,
}

impl Csv {
    /// Lee el csv sin schema: todas las columnas quedan como texto.
    pub fn new(ruta_csv: &str) -> Result<Csv, ErrorType> {
        Csv::with_config(ruta_csv, None, ReaderConfig::default())
    }

    /// Lee el csv usando el archivo de schema para nombrar y tipar las columnas.
    pub fn with_schema(ruta_csv: &str, ruta_schema: &str) -> Result<Csv, ErrorType> {
        Csv::with_config(ruta_csv, Some(ruta_schema), ReaderConfig::default())
    }

    pub fn with_config(
        ruta_csv: &str,
        ruta_schema: Option<&str>,
        config: ReaderConfig,
    ) -> Result<Csv, ErrorType> {
        if ruta_csv.is_empty() {
            return Err(ErrorType::InvalidPath(
                "the csv file path is empty".to_string(),
            ));
        }
        let csv_file = PathBuf::from(ruta_csv);
        // Una ruta de schema vacía es lo mismo que no tener schema
        let schema_file = ruta_schema.filter(|r| !r.is_empty()).map(PathBuf::from);

        let column_count = count_columns(&csv_file, config.delimiter)?;
        let schema = read_schema(schema_file.as_deref(), config.delimiter)?;

        // Si hay schema y tiene tantas columnas como el csv asumimos que hay que usarlo
        let uses_schema = schema_file.is_some() && schema.len() == column_count;
        let mut data = Table::new(
            &config.table_name,
            armar_columnas(&schema, uses_schema, column_count, &config)?,
        );
        if uses_schema {
            info!(
                "Using schema for {}: {} columns",
                csv_file.display(),
                column_count
            );
        } else {
            info!(
                "Schema not used for {} ({} descriptors, {} columns), using generic columns",
                csv_file.display(),
                schema.len(),
                column_count
            );
        }

        cargar_filas(&csv_file, &mut data, config.delimiter)?;
        info!(
            "Read {} rows from {}",
            data.row_count(),
            csv_file.display()
        );

        Ok(Csv {
            csv_file,
            schema,
            data,
            column_count,
            uses_schema,
        })
    }

    /// Mayor cantidad de campos encontrada en una línea del csv.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn uses_schema(&self) -> bool {
        self.uses_schema
    }
}

fn armar_columnas(
    schema: &[ColumnDescriptor],
    uses_schema: bool,
    column_count: usize,
    config: &ReaderConfig,
) -> Result<Vec<Column>, ErrorType> {
    if !uses_schema {
        return Ok((0..column_count)
            .map(|indice| Column::new(&config.generic_column_name(indice), ColumnType::Text))
            .collect());
    }

    // Se respeta el orden del archivo de schema, no el índice declarado
    let mut columnas: Vec<Column> = Vec::with_capacity(schema.len());
    for descriptor in schema {
        if columnas.iter().any(|c| c.name == descriptor.name) {
            return Err(ErrorType::InvalidSchema(format!(
                "duplicate column name '{}' (index {})",
                descriptor.name, descriptor.index
            )));
        }
        columnas.push(Column::new(&descriptor.name, descriptor.column_type));
    }
    Ok(columnas)
}

// Lee las filas del csv y las agrega a la tabla
fn cargar_filas(ruta_csv: &Path, tabla: &mut Table, delimiter: char) -> Result<(), ErrorType> {
    let file = File::open(ruta_csv)?;
    let reader = BufReader::new(file);

    for (numero, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() || !line.contains(delimiter) {
            continue;
        }

        let campos: Vec<&str> = line.split(delimiter).collect();
        // Puede ser un encabezado, un comentario o una fila cortada
        if campos.len() != tabla.column_count() {
            debug!(
                "Line {} skipped: {} fields, expected {}",
                numero + 1,
                campos.len(),
                tabla.column_count()
            );
            continue;
        }

        let valores = convertir_campos(tabla.columns(), &campos, numero + 1)?;
        tabla.add_row(valores)?;
    }

    Ok(())
}

fn convertir_campos(
    columnas: &[Column],
    campos: &[&str],
    numero: usize,
) -> Result<Vec<Value>, ErrorType> {
    columnas
        .iter()
        .zip(campos.iter())
        .map(|(columna, campo)| {
            columna
                .column_type
                .parse_value(campo)
                .ok_or_else(|| ErrorType::InvalidValue {
                    line: numero,
                    column: columna.name.clone(),
                    column_type: columna.column_type,
                    value: campo.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_empty_path_fails_before_io() {
        assert!(matches!(Csv::new(""), Err(ErrorType::InvalidPath(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_existe.csv");
        let result = Csv::new(path.to_str().unwrap());
        assert!(matches!(result, Err(ErrorType::Io(_))));
    }

    #[test]
    fn test_empty_schema_path_means_no_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "1,Alice\n").unwrap();

        let csv = Csv::with_schema(path.to_str().unwrap(), "").unwrap();
        assert!(!csv.uses_schema());
        assert_eq!(csv.data.columns()[1].name, "Column1");
    }

    #[test]
    fn test_duplicate_schema_column_is_rejected() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data.csv");
        let schema = dir.path().join("schema.txt");
        fs::write(&data, "1,Alice,30\n").unwrap();
        fs::write(&schema, "0,Id,Int32\n1,Name,String\n2,Id,Int32\n").unwrap();

        match Csv::with_schema(data.to_str().unwrap(), schema.to_str().unwrap()) {
            Err(ErrorType::InvalidSchema(descripcion)) => assert!(descripcion.contains("Id")),
            other => panic!("se esperaba InvalidSchema, vino {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_names_in_unused_schema_are_ignored() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data.csv");
        let schema = dir.path().join("schema.txt");
        fs::write(&data, "1,Alice,30\n").unwrap();
        fs::write(&schema, "0,Id,Int32\n1,Id,Int32\n").unwrap();

        let csv = Csv::with_schema(data.to_str().unwrap(), schema.to_str().unwrap()).unwrap();
        assert!(!csv.uses_schema());
        assert_eq!(csv.data.column_count(), 3);
    }

    #[test]
    fn test_empty_file_without_schema_does_not_use_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "").unwrap();

        let csv = Csv::new(path.to_str().unwrap()).unwrap();
        assert!(!csv.uses_schema());
        assert_eq!(csv.column_count(), 0);
        assert_eq!(csv.data.column_count(), 0);
        assert_eq!(csv.data.row_count(), 0);
    }

    #[test]
    fn test_convertir_campos_reports_line_and_column() {
        let columnas = vec![
            Column::new("Id", ColumnType::Int32),
            Column::new("Activo", ColumnType::Boolean),
        ];

        match convertir_campos(&columnas, &["7", "quizas"], 4) {
            Err(ErrorType::InvalidValue {
                line,
                column,
                column_type,
                value,
            }) => {
                assert_eq!(line, 4);
                assert_eq!(column, "Activo");
                assert_eq!(column_type, ColumnType::Boolean);
                assert_eq!(value, "quizas");
            }
            other => panic!("se esperaba InvalidValue, vino {:?}", other),
        }
    }

    #[test]
    fn test_custom_delimiter_and_table_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "AR1140;EZE;MAD\nAR1141;MAD;EZE\n").unwrap();

        let config = ReaderConfig::default()
            .with_delimiter(';')
            .with_table_name("Vuelos");
        let csv = Csv::with_config(path.to_str().unwrap(), None, config).unwrap();

        assert_eq!(csv.data.name, "Vuelos");
        assert_eq!(csv.column_count(), 3);
        assert_eq!(csv.data.row_count(), 2);
        assert_eq!(
            csv.data.value(1, "Column2"),
            Some(&Value::Text("EZE".to_string()))
        );
    }
}
