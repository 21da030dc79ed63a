use crate::value::Value;
use chrono::{NaiveDate, NaiveDateTime};
use log::warn;
use serde::Serialize;
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Tipos de valor que puede declarar una columna del schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColumnType {
    Text,
    Boolean,
    Int16,
    Int32,
    Int64,
    Double,
    Date,
    DateTime,
}

impl ColumnType {
    /// Busca el tipo correspondiente al nombre escrito en el schema.
    /// No distingue mayúsculas y acepta el prefijo `System.` (`System.Int32`).
    pub fn from_type_name(type_name: &str) -> Option<ColumnType> {
        let nombre = type_name.trim().to_ascii_lowercase();
        let nombre = nombre.strip_prefix("system.").unwrap_or(&nombre);

        match nombre {
            "string" | "text" | "varchar" => Some(ColumnType::Text),
            "boolean" | "bool" => Some(ColumnType::Boolean),
            "int16" | "short" | "smallint" => Some(ColumnType::Int16),
            "int32" | "int" | "integer" => Some(ColumnType::Int32),
            "int64" | "long" | "bigint" => Some(ColumnType::Int64),
            "double" | "float" => Some(ColumnType::Double),
            "date" => Some(ColumnType::Date),
            "datetime" | "timestamp" => Some(ColumnType::DateTime),
            _ => None,
        }
    }

    /// Igual que `from_type_name`, pero si el nombre no existe devuelve `Text`
    /// y deja registrado el fallo.
    pub fn resolve_or_text(type_name: &str) -> ColumnType {
        match ColumnType::from_type_name(type_name) {
            Some(column_type) => column_type,
            None => {
                warn!(
                    "Could not retrieve type {}, defaulting to {}",
                    type_name,
                    ColumnType::Text
                );
                ColumnType::Text
            }
        }
    }

    /// Convierte el texto de un campo al tipo de la columna.
    /// Devuelve None si el texto no representa un valor de este tipo.
    pub fn parse_value(&self, campo: &str) -> Option<Value> {
        // El texto se guarda tal cual, el resto se recorta
        let recortado = campo.trim();
        match self {
            ColumnType::Text => Some(Value::Text(campo.to_string())),
            ColumnType::Boolean => parse_boolean(recortado).map(Value::Boolean),
            ColumnType::Int16 => recortado.parse::<i16>().ok().map(Value::Int16),
            ColumnType::Int32 => recortado.parse::<i32>().ok().map(Value::Int32),
            ColumnType::Int64 => recortado.parse::<i64>().ok().map(Value::Int64),
            // NaN e infinito no tienen representación en json
            ColumnType::Double => recortado
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Value::Double),
            ColumnType::Date => NaiveDate::parse_from_str(recortado, DATE_FORMAT)
                .ok()
                .map(Value::Date),
            ColumnType::DateTime => parse_datetime(recortado).map(Value::DateTime),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nombre = match self {
            ColumnType::Text => "Text",
            ColumnType::Boolean => "Boolean",
            ColumnType::Int16 => "Int16",
            ColumnType::Int32 => "Int32",
            ColumnType::Int64 => "Int64",
            ColumnType::Double => "Double",
            ColumnType::Date => "Date",
            ColumnType::DateTime => "DateTime",
        };
        write!(f, "{}", nombre)
    }
}

fn parse_boolean(campo: &str) -> Option<bool> {
    if campo.eq_ignore_ascii_case("true") {
        Some(true)
    } else if campo.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

// Acepta fecha y hora, o solo la fecha (queda a medianoche)
fn parse_datetime(campo: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|formato| NaiveDateTime::parse_from_str(campo, formato).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(campo, DATE_FORMAT)
                .ok()
                .and_then(|fecha| fecha.and_hms_opt(0, 0, 0))
        })
}
