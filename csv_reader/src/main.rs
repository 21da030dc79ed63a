use csv_reader::error::{print_error, ErrorType};
use csv_reader::export::{schema_to_json, table_to_json, write_json};
use csv_reader::logger::init_logger;
use csv_reader::Csv;
use log::error;
use std::env;
use std::path::{Path, PathBuf};
use std::process;

const SALIDA_CON_SCHEMA: &str = "data_withschema.json";
const SALIDA_SIN_SCHEMA: &str = "data_withoutschema.json";

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 4 {
        let programa = args.first().map(String::as_str).unwrap_or("csv_reader");
        eprintln!(
            "Uso: {} <archivo csv> [archivo schema] [salida.json]",
            programa
        );
        process::exit(1);
    }

    // El handle tiene que quedar vivo para que se escriban los logs
    let _logger = match init_logger() {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Error al inicializar el logger: {}", e);
            None
        }
    };

    let ruta_csv = &args[1];
    let ruta_schema = args.get(2).map(String::as_str).filter(|r| !r.is_empty());
    let ruta_salida = args.get(3).map(PathBuf::from);

    if let Err(e) = run(ruta_csv, ruta_schema, ruta_salida) {
        error!("Error al leer {}: {}", ruta_csv, e);
        print_error(&e, &format!("No se pudo procesar {}", ruta_csv));
        process::exit(1);
    }
}

fn run(
    ruta_csv: &str,
    ruta_schema: Option<&str>,
    ruta_salida: Option<PathBuf>,
) -> Result<(), ErrorType> {
    let csv = match ruta_schema {
        Some(ruta_schema) => Csv::with_schema(ruta_csv, ruta_schema)?,
        None => Csv::new(ruta_csv)?,
    };

    let ruta_salida = ruta_salida.unwrap_or_else(|| ruta_salida_por_defecto(ruta_schema.is_some()));

    write_json(&ruta_salida, &table_to_json(&csv.data)?)?;
    if ruta_schema.is_some() {
        let ruta_estructura = ruta_schema_json(&ruta_salida);
        write_json(&ruta_estructura, &schema_to_json(&csv.data)?)?;
        println!(
            "Estructura de la tabla guardada en {}",
            ruta_estructura.display()
        );
    }

    println!(
        "CSV file read successfully. A JSON version has been saved to {}",
        ruta_salida.display()
    );
    Ok(())
}

fn ruta_salida_por_defecto(con_schema: bool) -> PathBuf {
    if con_schema {
        PathBuf::from(SALIDA_CON_SCHEMA)
    } else {
        PathBuf::from(SALIDA_SIN_SCHEMA)
    }
}

// data.json -> data.schema.json
fn ruta_schema_json(ruta_salida: &Path) -> PathBuf {
    let nombre = ruta_salida
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data".to_string());
    ruta_salida.with_file_name(format!("{}.schema.json", nombre))
}
