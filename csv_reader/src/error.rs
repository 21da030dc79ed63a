// error.rs

use crate::column_type::ColumnType;
use std::fmt;

// Define los tipos de errores
#[derive(Debug)]
pub enum ErrorType {
    InvalidPath(String),
    InvalidSchema(String),
    InvalidValue {
        line: usize,
        column: String,
        column_type: ColumnType,
        value: String,
    },
    InvalidRow(String),
    Io(String),
    Error(String),
}

// Implementa fmt::Display para ErrorType
impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::InvalidPath(description) => {
                write!(f, "Invalid file path: {}", description)
            }
            ErrorType::InvalidSchema(description) => {
                write!(f, "Invalid schema line: {}", description)
            }
            ErrorType::InvalidValue {
                line,
                column,
                column_type,
                value,
            } => write!(
                f,
                "Couldn't store <{}> in {} column ({}) at line {}",
                value, column, column_type, line
            ),
            ErrorType::InvalidRow(description) => write!(f, "Invalid row: {}", description),
            ErrorType::Io(description) => write!(f, "I/O error: {}", description),
            ErrorType::Error(description) => write!(f, "Error: {}", description),
        }
    }
}

// Implementa el trait std::error::Error para ErrorType
impl std::error::Error for ErrorType {}

impl From<std::io::Error> for ErrorType {
    fn from(e: std::io::Error) -> Self {
        ErrorType::Io(e.to_string())
    }
}

impl From<serde_json::Error> for ErrorType {
    fn from(e: serde_json::Error) -> Self {
        ErrorType::Error(e.to_string())
    }
}

// Función para imprimir errores, la dejo para el main
pub fn print_error(error_type: &ErrorType, description: &str) {
    eprintln!("[{:?}]: {}", error_type, description);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_display_invalid_value() {
        let error = ErrorType::InvalidValue {
            line: 3,
            column: "Age".to_string(),
            column_type: ColumnType::Int32,
            value: "abc".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Couldn't store <abc> in Age column (Int32) at line 3"
        );
    }

    #[test]
    fn test_from_io_error() {
        let error: ErrorType = Error::new(ErrorKind::NotFound, "no existe").into();
        match error {
            ErrorType::Io(description) => assert_eq!(description, "no existe"),
            other => panic!("se esperaba ErrorType::Io, vino {:?}", other),
        }
    }
}
