pub const DEFAULT_DELIMITER: char = ',';
pub const DEFAULT_TABLE_NAME: &str = "CsvData";
pub const DEFAULT_COLUMN_PREFIX: &str = "Column";

/// Parámetros de lectura de un archivo csv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    pub delimiter: char,
    pub table_name: String,
    pub generic_column_prefix: String, // Prefijo de las columnas sin schema (Column0, Column1...)
}

impl ReaderConfig {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_table_name(mut self, table_name: &str) -> Self {
        self.table_name = table_name.to_string();
        self
    }

    pub fn generic_column_name(&self, indice: usize) -> String {
        format!("{}{}", self.generic_column_prefix, indice)
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            table_name: DEFAULT_TABLE_NAME.to_string(),
            generic_column_prefix: DEFAULT_COLUMN_PREFIX.to_string(),
        }
    }
}
