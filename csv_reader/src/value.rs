use crate::column_type::{ColumnType, DATE_FORMAT};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// Valor tipado de una celda de la tabla.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Boolean(bool),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Double(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Value {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::Text(_) => ColumnType::Text,
            Value::Boolean(_) => ColumnType::Boolean,
            Value::Int16(_) => ColumnType::Int16,
            Value::Int32(_) => ColumnType::Int32,
            Value::Int64(_) => ColumnType::Int64,
            Value::Double(_) => ColumnType::Double,
            Value::Date(_) => ColumnType::Date,
            Value::DateTime(_) => ColumnType::DateTime,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(texto) => Some(texto),
            _ => None,
        }
    }

    // Los tres enteros se leen como i64
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int16(n) => Some(i64::from(*n)),
            Value::Int32(n) => Some(i64::from(*n)),
            Value::Int64(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(texto) => write!(f, "{}", texto),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Int16(n) => write!(f, "{}", n),
            Value::Int32(n) => write!(f, "{}", n),
            Value::Int64(n) => write!(f, "{}", n),
            Value::Double(n) => write!(f, "{}", n),
            Value::Date(fecha) => write!(f, "{}", fecha.format(DATE_FORMAT)),
            Value::DateTime(fecha) => write!(f, "{}", fecha.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}
