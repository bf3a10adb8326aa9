// sqlx::Error -> AppError mapping

use questions_core::error::AppError;

/// Convert sqlx::Error to AppError::Storage with structured information
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                let code_str = code.as_ref();

                // SQLite result codes: https://www.sqlite.org/rescode.html
                match code_str {
                    "5" => AppError::Storage(format!(
                        "Database locked (SQLITE_BUSY): {}",
                        db_err.message()
                    )),
                    "1" => {
                        // SQLITE_ERROR - usually a missing table or bad SQL
                        AppError::Storage(format!("SQL error: {}", db_err.message()))
                    }
                    "14" => AppError::Storage(format!(
                        "Unable to open database (SQLITE_CANTOPEN): {}",
                        db_err.message()
                    )),
                    "787" | "3850" => AppError::Storage(format!(
                        "Foreign key constraint violation: {} ({})",
                        db_err.message(),
                        code_str
                    )),
                    _ => AppError::Storage(format!(
                        "Database error [{}]: {}",
                        code_str,
                        db_err.message()
                    )),
                }
            } else {
                AppError::Storage(format!("Database error: {}", db_err.message()))
            }
        }
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Storage(format!("Column not found: {}", col))
        }
        sqlx::Error::ColumnDecode { index, source } => {
            AppError::Storage(format!("Cannot decode column {}: {}", index, source))
        }
        // Connection, pool, protocol errors
        _ => AppError::Storage(err.to_string()),
    }
}
