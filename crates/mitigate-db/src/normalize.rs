//! Startup normalization of citizen identifiers.
//!
//! Citizens imported by older tooling may carry `citizen_id` as a string. The
//! task below rewrites every convertible identifier as a JSON integer so that
//! sorting and lookups treat all citizens alike. A record that cannot be
//! converted is logged and skipped; it never aborts startup.

use serde_json::{Value, json};

use mitigate_core::enums::Collection;

use crate::documents::Document;
use crate::error::DatabaseError;
use crate::service::MitigateService;

/// Outcome of one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub converted: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

enum Coercion {
    AlreadyInteger,
    Converted(i64),
    Skip(String),
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn coerce(value: Option<&Value>) -> Coercion {
    match value {
        None => Coercion::Skip("missing citizen_id".into()),
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => match n.as_i64() {
            Some(_) => Coercion::AlreadyInteger,
            None => Coercion::Skip(format!("citizen_id {n} out of range")),
        },
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if f.is_finite() && f.trunc().abs() < 9.0e15 => {
                Coercion::Converted(f.trunc() as i64)
            }
            _ => Coercion::Skip(format!("citizen_id {n} is not representable")),
        },
        Some(Value::String(s)) => s.trim().parse::<i64>().map_or_else(
            |e| Coercion::Skip(format!("citizen_id '{s}' is not an integer: {e}")),
            Coercion::Converted,
        ),
        Some(other) => Coercion::Skip(format!("citizen_id has unsupported value {other}")),
    }
}

impl MitigateService {
    /// Coerce every Citizen's `citizen_id` to a JSON integer.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` only when the collection itself cannot be read.
    /// Failures on individual records are logged and counted as skipped.
    pub async fn normalize_citizen_ids(&self) -> Result<NormalizeReport, DatabaseError> {
        let mut report = NormalizeReport::default();

        for Document { id, body, .. } in self.find_documents(Collection::Citizens).await? {
            match coerce(body.get("citizen_id")) {
                Coercion::AlreadyInteger => report.unchanged += 1,
                Coercion::Converted(citizen_id) => {
                    match self
                        .update_document(
                            Collection::Citizens,
                            &id,
                            &json!({ "citizen_id": citizen_id }),
                        )
                        .await
                    {
                        Ok(_) => report.converted += 1,
                        Err(error) => {
                            tracing::warn!(%id, %error, "skipped citizen document");
                            report.skipped += 1;
                        }
                    }
                }
                Coercion::Skip(reason) => {
                    tracing::warn!(%id, %reason, "skipped citizen document");
                    report.skipped += 1;
                }
            }
        }

        Ok(report)
    }
}
