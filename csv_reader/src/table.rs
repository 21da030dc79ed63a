use crate::column_type::ColumnType;
use crate::error::ErrorType;
use crate::value::Value;
use serde::Serialize;

// Columna de la tabla con su tipo de dato
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(name: &str, column_type: ColumnType) -> Self {
        Column {
            name: name.to_string(),
            column_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub values: Vec<Value>, // Un valor por columna, en el orden de las columnas
}

impl Row {
    pub fn get(&self, indice: usize) -> Option<&Value> {
        self.values.get(indice)
    }
}

/// Tabla en memoria: columnas con nombre y tipo, y filas en orden de inserción.
#[derive(Debug, Clone)]
pub struct Table {
    pub name: String,
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(name: &str, columns: Vec<Column>) -> Self {
        Table {
            name: name.to_string(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn row(&self, indice: usize) -> Option<&Row> {
        self.rows.get(indice)
    }

    /// Devuelve la celda de la fila `fila` en la columna llamada `columna`.
    pub fn value(&self, fila: usize, columna: &str) -> Option<&Value> {
        let indice = self.column_index(columna)?;
        self.rows.get(fila)?.get(indice)
    }

    /// Agrega una fila al final. La cantidad y el tipo de los valores
    /// tienen que coincidir con las columnas.
    pub fn add_row(&mut self, values: Vec<Value>) -> Result<(), ErrorType> {
        if values.len() != self.columns.len() {
            return Err(ErrorType::InvalidRow(format!(
                "expected {} values, got {}",
                self.columns.len(),
                values.len()
            )));
        }

        for (columna, valor) in self.columns.iter().zip(values.iter()) {
            if valor.column_type() != columna.column_type {
                return Err(ErrorType::InvalidRow(format!(
                    "column {} is {}, got a {} value",
                    columna.name,
                    columna.column_type,
                    valor.column_type()
                )));
            }
        }

        self.rows.push(Row { values });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabla_personas() -> Table {
        Table::new(
            "CsvData",
            vec![
                Column::new("Id", ColumnType::Int32),
                Column::new("Name", ColumnType::Text),
            ],
        )
    }

    #[test]
    fn test_add_row_keeps_insertion_order() {
        let mut table = tabla_personas();
        table
            .add_row(vec![Value::Int32(2), Value::Text("Bob".to_string())])
            .unwrap();
        table
            .add_row(vec![Value::Int32(1), Value::Text("Alice".to_string())])
            .unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.value(0, "Name"), Some(&Value::Text("Bob".to_string())));
        assert_eq!(table.value(1, "Id"), Some(&Value::Int32(1)));
        assert_eq!(table.value(1, "Missing"), None);
    }

    #[test]
    fn test_add_row_rejects_wrong_length() {
        let mut table = tabla_personas();
        let result = table.add_row(vec![Value::Int32(1)]);
        assert!(matches!(result, Err(ErrorType::InvalidRow(_))));
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_add_row_rejects_wrong_type() {
        let mut table = tabla_personas();
        let result = table.add_row(vec![
            Value::Text("1".to_string()),
            Value::Text("Alice".to_string()),
        ]);
        assert!(matches!(result, Err(ErrorType::InvalidRow(_))));
    }

    #[test]
    fn test_column_metadata() {
        let table = tabla_personas();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_index("Name"), Some(1));
        assert_eq!(table.columns()[0].column_type, ColumnType::Int32);
    }
}
