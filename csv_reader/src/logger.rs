use crate::error::ErrorType;
use flexi_logger::{Duplicate, FileSpec, Logger, LoggerHandle, WriteMode};

/// Inicializa el logger: escribe en la carpeta `logs` y duplica a stdout desde `info`.
/// El nivel sale de `RUST_LOG` y si no está definido queda en `info`.
/// El handle devuelto tiene que vivir hasta el final del programa para que se vacíe el buffer.
pub fn init_logger() -> Result<LoggerHandle, ErrorType> {
    let file_spec = FileSpec::default().directory("logs");

    Logger::try_with_env_or_str("info")
        .map_err(|e| ErrorType::Error(format!("invalid log specification: {}", e)))?
        .log_to_file(file_spec)
        .write_mode(WriteMode::BufferAndFlush)
        .duplicate_to_stdout(Duplicate::Info)
        .format(|write, _now, record| {
            write!(
                write,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d: %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .start()
        .map_err(|e| ErrorType::Error(format!("could not start logger: {}", e)))
}
